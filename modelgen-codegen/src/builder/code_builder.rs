//! Indented text output for [`Renderable`] nodes.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated source text, tracking the current nesting depth.
///
/// Blocks follow the class layout used by the model generator: the header
/// on its own line, then the opening brace on the next line.
///
/// ```
/// use modelgen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::java();
/// builder.emit(&CodeFragment::block(
///     "public int getLine()",
///     vec![CodeFragment::line("return get_ValueAsInt(COLUMNNAME_Line);")],
/// ));
///
/// assert_eq!(
///     builder.build(),
///     "public int getLine()\n{\n    return get_ValueAsInt(COLUMNNAME_Line);\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent: Indent,
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            depth: 0,
            out: String::new(),
        }
    }

    /// Builder using the four-space model class indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Write one line at the current depth.
    pub fn push_line(&mut self, text: &str) -> &mut Self {
        self.indent.write(&mut self.out, self.depth);
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    /// Write an empty line; never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Write a Javadoc comment.
    ///
    /// One entry collapses to `/** text */`; several become a starred block
    /// where empty entries render as a bare ` *`.
    pub fn push_javadoc<S: AsRef<str>>(&mut self, lines: &[S]) -> &mut Self {
        if let [only] = lines {
            return self.push_line(&format!("/** {} */", only.as_ref()));
        }
        if lines.is_empty() {
            return self;
        }
        self.push_line("/**");
        for line in lines.iter().map(AsRef::as_ref) {
            match line {
                "" => self.push_line(" *"),
                text => self.push_line(&format!(" * {text}")),
            };
        }
        self.push_line(" */")
    }

    /// Write every fragment produced by `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        node.to_fragments()
            .into_iter()
            .for_each(|fragment| self.apply_fragment(fragment));
        self
    }

    /// Write a single fragment, recursing into nested ones.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => {
                self.push_line(&text);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::JavaDoc(lines) => {
                self.push_javadoc(&lines);
            }
            CodeFragment::Sequence(children) => self.apply_all(children),
            CodeFragment::Indent(children) => self.nested(children),
            CodeFragment::Block { header, body } => {
                self.push_line(&header).push_line("{");
                self.nested(body);
                self.push_line("}");
            }
        }
    }

    fn apply_all(&mut self, fragments: Vec<CodeFragment>) {
        for fragment in fragments {
            self.apply_fragment(fragment);
        }
    }

    fn nested(&mut self, fragments: Vec<CodeFragment>) {
        self.push_indent();
        self.apply_all(fragments);
        self.push_dedent();
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn build(self) -> String {
        self.out
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}
