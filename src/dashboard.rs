mod refresh;
mod sink;
mod snapshot;
mod target;

pub use refresh::*;
pub use sink::*;
pub use snapshot::*;
pub use target::*;
