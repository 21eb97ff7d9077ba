use std::io::{self, Write};

use crate::dashboard::DisplaySnapshot;

/// Receives every successfully rendered snapshot.
pub trait DisplaySink {
    fn show(&mut self, snapshot: &DisplaySnapshot) -> io::Result<()>;
}

/// Writes the snapshot as an aligned text block.
#[derive(Debug)]
pub struct TextSink<W> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for TextSink<W> {
    fn show(&mut self, snapshot: &DisplaySnapshot) -> io::Result<()> {
        match snapshot.refreshed_at {
            Some(at) => writeln!(self.writer, "[{}]", at.format("%Y-%m-%d %H:%M:%S %Z"))?,
            None => writeln!(self.writer, "[never refreshed]")?,
        }

        for (target, text) in snapshot.fields() {
            writeln!(self.writer, "  {:<14} {}", target.label(), text)?;
        }
        writeln!(self.writer)?;

        self.writer.flush()
    }
}
