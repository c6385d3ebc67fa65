//! Terminal bell as the completion sound.

use std::io::{self, Write};

use crossterm::style::Print;
use crossterm::QueueableCommand;
use tracing::debug;

use crate::engine::AudioCue;

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl TerminalBell {
    fn ring(&self) -> io::Result<()> {
        let mut out = io::stdout();
        out.queue(Print('\x07'))?;
        out.flush()
    }
}

impl AudioCue for TerminalBell {
    fn trigger(&mut self) {
        if let Err(e) = self.ring() {
            debug!(error = %e, "terminal bell failed");
        }
    }
}
