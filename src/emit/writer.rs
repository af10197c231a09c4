//! Line buffer for workspace serialization.

/// Collects output lines. Lines carry no terminator; the file writer appends one.
pub struct LineWriter {
    lines: Vec<String>,
}

impl LineWriter {
    pub fn new() -> Self {
        Self {
            lines: Vec::with_capacity(64),
        }
    }

    /// Write a complete line.
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Write an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Write `count` empty lines.
    pub fn blanks(&mut self, count: usize) {
        for _ in 0..count {
            self.blank();
        }
    }

    /// Consume the writer and return the collected lines.
    pub fn finish(self) -> Vec<String> {
        self.lines
    }
}

impl Default for LineWriter {
    fn default() -> Self {
        Self::new()
    }
}
