mod client;
mod endpoint;
mod error;
mod reading;
mod switch;

pub use client::*;
pub use endpoint::*;
pub use error::*;
pub use reading::*;
pub use switch::*;
