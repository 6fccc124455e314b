//! Output sinks

/// Destination for result and diagnostic lines
pub trait Sink {
    fn line(&mut self, text: &str);
}

/// Writes every line to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Sink for Stdout {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Collects lines in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drain collected lines
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// Collected lines joined with `\n`
    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }
}

impl Sink for Buffer {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
