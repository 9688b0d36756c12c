//! Console implementation of the familiar voice.

use std::io::Write;

use crate::infrastructure::ports::FamiliarVoicePort;

/// Prints familiar lines to stdout, without a trailing newline.
pub struct ConsoleVoice;

impl ConsoleVoice {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleVoice {
    fn default() -> Self {
        Self::new()
    }
}

impl FamiliarVoicePort for ConsoleVoice {
    fn speak(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = write!(stdout, "{}", line).and_then(|_| stdout.flush()) {
            tracing::warn!(error = %e, "Failed to write familiar line");
        }
    }
}
