//! Output sink shared by every command report.

use std::fmt;

/// One piece of report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Section(&'a str),
    KeyValue(&'a str, &'a str),
    Item(&'a str),
    Added(&'a str),
    Failed(&'a str),
    Warning(&'a str),
    Divider(&'a str),
    Text(&'a str),
    Blank,
}

impl Line<'_> {
    /// Problems go to stderr so stdout stays clean for previews.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Self::Failed(_) | Self::Warning(_))
    }

    fn is_item(&self) -> bool {
        matches!(self, Self::Item(_) | Self::Added(_) | Self::Failed(_))
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Section(name) => write!(f, "{name}:"),
            Self::KeyValue(key, value) => write!(f, "{key}: {value}"),
            Self::Item(text) => write!(f, "- {text}"),
            Self::Added(text) => write!(f, "+ {text}"),
            Self::Failed(text) => write!(f, "✗ {text}"),
            Self::Warning(msg) => write!(f, "warning: {msg}"),
            Self::Divider(label) => write!(f, "── {label} ──"),
            Self::Text(text) => f.write_str(text),
            Self::Blank => Ok(()),
        }
    }
}

/// Where reports send their lines.
///
/// Reports pick the kind of line; the sink decides how it looks.
pub trait Output {
    fn write(&mut self, line: Line<'_>);

    fn section(&mut self, name: &str) {
        self.write(Line::Section(name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.write(Line::KeyValue(key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.write(Line::Item(text));
    }

    fn added_item(&mut self, text: &str) {
        self.write(Line::Added(text));
    }

    fn failed_item(&mut self, text: &str) {
        self.write(Line::Failed(text));
    }

    fn warning(&mut self, msg: &str) {
        self.write(Line::Warning(msg));
    }

    fn divider(&mut self, label: &str) {
        self.write(Line::Divider(label));
    }

    fn preformatted(&mut self, text: &str) {
        self.write(Line::Text(text));
    }

    fn newline(&mut self) {
        self.write(Line::Blank);
    }
}

pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to the terminal, indenting list items under their section.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn write(&mut self, line: Line<'_>) {
        let indent = if line.is_item() { "  " } else { "" };
        if line.is_diagnostic() {
            eprintln!("{indent}{line}");
        } else {
            println!("{indent}{line}");
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{Line, Output};

    /// Keeps every rendered line, unindented.
    #[derive(Default)]
    pub struct RecordingOutput {
        pub lines: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn write(&mut self, line: Line<'_>) {
            self.lines.push(line.to_string());
        }
    }
}
