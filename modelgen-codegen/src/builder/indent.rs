//! Indentation unit for generated sources.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
    Tab,
}

impl Indent {
    /// Four spaces, the layout of every generated model class.
    pub const JAVA: Self = Self::Spaces(4);

    /// Append `depth` levels of this indentation to `out`.
    pub fn write(&self, out: &mut String, depth: usize) {
        match self {
            Self::Spaces(width) => out.extend(std::iter::repeat_n(' ', width * depth)),
            Self::Tab => out.extend(std::iter::repeat_n('\t', depth)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}
