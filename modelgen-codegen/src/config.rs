//! Generator configuration.
//!
//! Everything that varies between generation runs is carried in an explicit
//! [`GeneratorConfig`] value handed to the generator.

use std::collections::BTreeSet;

use modelgen_meta::Project;

/// Id columns for which 0 is a valid value.
pub const DEFAULT_ZERO_ID_COLUMNS: &[&str] = &[
    "AD_Client_ID",
    "AD_Org_ID",
    "Record_ID",
    "C_DocType_ID",
    "Node_ID",
    "AD_Role_ID",
    "M_AttributeSet_ID",
    "M_AttributeSetInstance_ID",
];

/// Decides which referenced classes get typed relationship accessors.
///
/// With an allow-list only listed classes pass; the deny-list always wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferencePolicy {
    allow: Option<BTreeSet<String>>,
    deny: BTreeSet<String>,
}

impl ReferencePolicy {
    /// A policy allowing every referenced class.
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Restrict typed accessors to the given classes.
    pub fn allow_only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allow: Some(names.into_iter().map(Into::into).collect()),
            deny: BTreeSet::new(),
        }
    }

    pub fn deny<S: Into<String>>(mut self, name: S) -> Self {
        self.deny.insert(name.into());
        self
    }

    pub fn allows(&self, class_name: &str) -> bool {
        if self.deny.contains(class_name) {
            return false;
        }
        self.allow
            .as_ref()
            .is_none_or(|allow| allow.contains(class_name))
    }
}

/// Configuration of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Package of the generated classes
    pub package: String,
    /// Emit members only older runtimes rely on (`getKeyNamePair`, `get_AccessLevel`)
    pub legacy: bool,
    pub class_prefix: String,
    /// Prefix of the classes typed relationship accessors refer to
    pub reference_class_prefix: String,
    /// Suffix of a table's key column
    pub key_suffix: String,
    pub zero_id_columns: BTreeSet<String>,
    pub references: ReferencePolicy,
}

impl GeneratorConfig {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            legacy: false,
            class_prefix: "X_".to_string(),
            reference_class_prefix: "I_".to_string(),
            key_suffix: "_ID".to_string(),
            zero_id_columns: DEFAULT_ZERO_ID_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            references: ReferencePolicy::allow_all(),
        }
    }

    pub fn legacy(mut self, legacy: bool) -> Self {
        self.legacy = legacy;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn with_reference_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.reference_class_prefix = prefix.into();
        self
    }

    pub fn with_references(mut self, references: ReferencePolicy) -> Self {
        self.references = references;
        self
    }

    pub fn with_zero_id_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.zero_id_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Smallest valid value of an id column; smaller values are stored as null.
    pub fn id_floor(&self, column_name: &str) -> i32 {
        if self.zero_id_columns.contains(column_name) {
            0
        } else {
            1
        }
    }

    /// Name of the class generated for `table`.
    pub fn class_name(&self, table: &str) -> String {
        format!("{}{}", self.class_prefix, table)
    }

    /// Name of the key column of `table`.
    pub fn key_column(&self, table: &str) -> String {
        format!("{}{}", table, self.key_suffix)
    }
}

impl From<&Project> for GeneratorConfig {
    fn from(project: &Project) -> Self {
        let generator = &project.generator;
        let mut config = GeneratorConfig::new(generator.package.clone()).legacy(generator.legacy);
        if let Some(prefix) = &generator.class_prefix {
            config = config.with_class_prefix(prefix.clone());
        }
        if let Some(prefix) = &generator.reference_class_prefix {
            config = config.with_reference_class_prefix(prefix.clone());
        }
        if let Some(columns) = &generator.zero_id_columns {
            config = config.with_zero_id_columns(columns.iter().cloned());
        }

        let mut references = match &project.references.allow {
            Some(allow) => ReferencePolicy::allow_only(allow.iter().cloned()),
            None => ReferencePolicy::allow_all(),
        };
        for name in &project.references.deny {
            references = references.deny(name.clone());
        }
        config.with_references(references)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::new("org.compiere.model");
        assert!(!config.legacy);
        assert_eq!(config.class_name("C_Order"), "X_C_Order");
        assert_eq!(config.key_column("C_Order"), "C_Order_ID");
        assert!(config.references.allows("I_C_BPartner"));
    }

    #[test]
    fn test_id_floor() {
        let config = GeneratorConfig::new("org.compiere.model");
        assert_eq!(config.id_floor("AD_Org_ID"), 0);
        assert_eq!(config.id_floor("M_AttributeSetInstance_ID"), 0);
        assert_eq!(config.id_floor("C_BPartner_ID"), 1);

        let custom = config.with_zero_id_columns(["C_BPartner_ID"]);
        assert_eq!(custom.id_floor("C_BPartner_ID"), 0);
        assert_eq!(custom.id_floor("AD_Org_ID"), 1);
    }

    #[test]
    fn test_reference_policy() {
        let policy = ReferencePolicy::allow_only(["X_C_Currency", "X_C_BPartner"]).deny("X_C_BPartner");
        assert!(policy.allows("X_C_Currency"));
        assert!(!policy.allows("X_C_BPartner"));
        assert!(!policy.allows("X_M_Product"));

        let deny_only = ReferencePolicy::allow_all().deny("I_AD_Client");
        assert!(deny_only.allows("I_M_Product"));
        assert!(!deny_only.allows("I_AD_Client"));
    }

    #[test]
    fn test_from_project() {
        let project: Project = r#"
[generator]
package = "org.compiere.model"
legacy = true
reference_class_prefix = "X_"
zero_id_columns = ["AD_Org_ID"]

[references]
allow = ["X_C_Currency"]
deny = ["X_AD_Org"]
"#
        .parse()
        .unwrap();

        let config = GeneratorConfig::from(&project);

        assert!(config.legacy);
        assert_eq!(config.class_prefix, "X_");
        assert_eq!(config.reference_class_prefix, "X_");
        assert_eq!(config.id_floor("AD_Client_ID"), 1);
        assert!(config.references.allows("X_C_Currency"));
        assert!(!config.references.allows("X_AD_Org"));
        assert!(!config.references.allows("I_C_Currency"));
    }
}
