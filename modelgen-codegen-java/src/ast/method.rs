//! Java method builder.

use modelgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Java method.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub is_final: bool,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_final: false,
        }
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    fn declaration(&self) -> String {
        let modifier = if self.is_final { "final " } else { "" };
        format!("{}{} {}", modifier, self.ty, self.name)
    }
}

/// Visibility modifier of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

/// Builder for Java methods and constructors.
///
/// A method without a return type renders as a constructor.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    doc: Vec<String>,
    annotations: Vec<String>,
    visibility: Visibility,
    type_params: Option<String>,
    return_type: Option<String>,
    params: Vec<Param>,
    body: Vec<CodeFragment>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            annotations: Vec::new(),
            visibility: Visibility::Public,
            type_params: None,
            return_type: None,
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add a Javadoc line.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    /// Add an annotation, without the leading `@`.
    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn overrides(self) -> Self {
        self.annotation("Override")
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn protected(self) -> Self {
        self.visibility(Visibility::Protected)
    }

    /// Declare type parameters, without the angle brackets.
    pub fn type_params(mut self, params: impl Into<String>) -> Self {
        self.type_params = Some(params.into());
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a line to the method body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    /// Add a statement nested one level deeper than the body.
    pub fn body_nested(mut self, line: impl Into<String>) -> Self {
        self.body
            .push(CodeFragment::indent(vec![CodeFragment::line(line)]));
        self
    }

    pub fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(Param::declaration)
            .collect::<Vec<_>>()
            .join(", ");

        let mut signature = String::from(self.visibility.as_str());
        if let Some(type_params) = &self.type_params {
            signature.push_str(&format!(" <{}>", type_params));
        }
        if let Some(ret) = &self.return_type {
            signature.push(' ');
            signature.push_str(ret);
        }
        signature.push_str(&format!(" {}({})", self.name, params));
        signature
    }

    /// Render the method to a CodeBuilder.
    pub fn render(&self, mut builder: CodeBuilder) -> CodeBuilder {
        builder.emit(self);
        builder
    }

    /// Build the method as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::java()).build()
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.doc.is_empty() {
            fragments.push(CodeFragment::JavaDoc(self.doc.clone()));
        }
        fragments.extend(
            self.annotations
                .iter()
                .map(|a| CodeFragment::line(format!("@{}", a))),
        );
        fragments.push(CodeFragment::block(self.signature(), self.body.clone()));
        fragments
    }
}
