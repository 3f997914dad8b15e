//! The `modelgen.toml` project file.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result, SourceContext, error::find_value_span};

/// Default project file name.
pub const PROJECT_FILE: &str = "modelgen.toml";

/// Root of `modelgen.toml`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub generator: GeneratorSection,
    #[serde(default)]
    pub references: ReferencesSection,
}

/// `[generator]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSection {
    /// Java package of the generated classes
    pub package: String,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Directory holding the table metadata files
    #[serde(default = "default_tables")]
    pub tables: PathBuf,
    #[serde(default)]
    pub legacy: bool,
    #[serde(default)]
    pub class_prefix: Option<String>,
    #[serde(default)]
    pub reference_class_prefix: Option<String>,
    /// Id columns for which 0 is a valid value
    #[serde(default)]
    pub zero_id_columns: Option<Vec<String>>,
}

fn default_output() -> PathBuf {
    PathBuf::from("src/main/java-gen")
}

fn default_tables() -> PathBuf {
    PathBuf::from("metadata")
}

/// `[references]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferencesSection {
    /// When set, only these referenced classes get typed accessors
    #[serde(default)]
    pub allow: Option<Vec<String>>,
    #[serde(default)]
    pub deny: Vec<String>,
}

impl FromStr for Project {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_project(s, PROJECT_FILE)
    }
}

/// Parse a project file from content with the given filename for error reporting.
pub fn parse_project(content: &str, filename: &str) -> Result<Project> {
    let source = SourceContext::new(content, filename);
    let project: Project = toml::from_str(content).map_err(|e| source.toml_error(e))?;
    validate_project(&project, &source)?;
    Ok(project)
}

fn validate_project(project: &Project, source: &SourceContext) -> Result<()> {
    let package = &project.generator.package;
    if let Some(reason) = validate_package(package) {
        return Err(Box::new(Error::Validation {
            src: source.named_source(),
            span: find_value_span(source.src(), package),
            message: format!("invalid package '{}': {}", package, reason),
        }));
    }

    for prefix in [
        &project.generator.class_prefix,
        &project.generator.reference_class_prefix,
    ]
    .into_iter()
    .flatten()
    {
        if !prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(Box::new(Error::Validation {
                src: source.named_source(),
                span: find_value_span(source.src(), prefix),
                message: format!("invalid class prefix '{}'", prefix),
            }));
        }
    }
    Ok(())
}

/// Returns the reason a Java package name is invalid, if any
fn validate_package(package: &str) -> Option<&'static str> {
    if package.is_empty() {
        return Some("package cannot be empty");
    }
    for segment in package.split('.') {
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            Some(_) => return Some("segments must start with a letter or underscore"),
            None => return Some("package contains an empty segment"),
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Some("segments may only contain letters, numbers and underscores");
        }
    }
    None
}

/// A `modelgen.toml` on disk.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    path: PathBuf,
    project: Project,
}

impl ProjectFile {
    /// Open and parse a project file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let project = parse_project(&content, &path.display().to_string())?;
        Ok(Self { path, project })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Directory relative paths in the file are resolved against
    pub fn root(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join(&self.project.generator.output)
    }

    pub fn tables_dir(&self) -> PathBuf {
        self.root().join(&self.project.generator.tables)
    }
}
