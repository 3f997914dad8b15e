//! Column and table metadata vocabulary.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// UI/semantic kind of a column, identified by its numeric reference code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "CodeOrName")]
pub enum DisplayType {
    String,
    Integer,
    Amount,
    Id,
    Text,
    Date,
    DateTime,
    List,
    Table,
    TableDir,
    YesNo,
    Location,
    Number,
    Binary,
    Time,
    Account,
    Color,
    Button,
    Quantity,
    Search,
    Locator,
    Image,
    Assignment,
    Memo,
    PAttribute,
    TextLong,
    CostPrice,
    FilePath,
    FileName,
    Url,
    PrinterName,
}

const DISPLAY_TYPES: &[(DisplayType, i32, &str)] = &[
    (DisplayType::String, 10, "String"),
    (DisplayType::Integer, 11, "Integer"),
    (DisplayType::Amount, 12, "Amount"),
    (DisplayType::Id, 13, "ID"),
    (DisplayType::Text, 14, "Text"),
    (DisplayType::Date, 15, "Date"),
    (DisplayType::DateTime, 16, "DateTime"),
    (DisplayType::List, 17, "List"),
    (DisplayType::Table, 18, "Table"),
    (DisplayType::TableDir, 19, "TableDir"),
    (DisplayType::YesNo, 20, "YesNo"),
    (DisplayType::Location, 21, "Location"),
    (DisplayType::Number, 22, "Number"),
    (DisplayType::Binary, 23, "Binary"),
    (DisplayType::Time, 24, "Time"),
    (DisplayType::Account, 25, "Account"),
    (DisplayType::Color, 27, "Color"),
    (DisplayType::Button, 28, "Button"),
    (DisplayType::Quantity, 29, "Quantity"),
    (DisplayType::Search, 30, "Search"),
    (DisplayType::Locator, 31, "Locator"),
    (DisplayType::Image, 32, "Image"),
    (DisplayType::Assignment, 33, "Assignment"),
    (DisplayType::Memo, 34, "Memo"),
    (DisplayType::PAttribute, 35, "PAttribute"),
    (DisplayType::TextLong, 36, "TextLong"),
    (DisplayType::CostPrice, 37, "CostPrice"),
    (DisplayType::FilePath, 38, "FilePath"),
    (DisplayType::FileName, 39, "FileName"),
    (DisplayType::Url, 40, "URL"),
    (DisplayType::PrinterName, 42, "PrinterName"),
];

impl DisplayType {
    /// Numeric reference code.
    pub fn code(&self) -> i32 {
        self.entry().1
    }

    /// Canonical name (used in metadata files).
    pub fn as_str(&self) -> &'static str {
        self.entry().2
    }

    fn entry(&self) -> &'static (DisplayType, i32, &'static str) {
        DISPLAY_TYPES
            .iter()
            .find(|(dt, _, _)| dt == self)
            .unwrap_or(&DISPLAY_TYPES[0])
    }

    /// Look up a display type by its numeric reference code.
    pub fn from_code(code: i32) -> Option<Self> {
        DISPLAY_TYPES
            .iter()
            .find(|(_, c, _)| *c == code)
            .map(|(dt, _, _)| *dt)
    }

    /// Foreign-key-shaped kinds whose value is the id of another record.
    pub fn is_id(&self) -> bool {
        matches!(
            self,
            Self::Id
                | Self::Table
                | Self::TableDir
                | Self::Search
                | Self::Location
                | Self::Locator
                | Self::Account
                | Self::Assignment
                | Self::PAttribute
                | Self::Image
                | Self::Color
        )
    }

    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Self::String
                | Self::Text
                | Self::List
                | Self::Memo
                | Self::TextLong
                | Self::FilePath
                | Self::FileName
                | Self::Url
                | Self::PrinterName
        )
    }

    /// Fractional numeric kinds.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Amount | Self::Number | Self::CostPrice | Self::Quantity
        )
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Self::Date | Self::DateTime | Self::Time)
    }

    pub fn is_lob(&self) -> bool {
        matches!(self, Self::Binary | Self::TextLong)
    }

    /// The value class a column of this kind holds when no column-name
    /// rule overrides it.
    pub fn value_class(&self) -> ValueClass {
        if self.is_text() {
            ValueClass::String
        } else if self.is_id() || matches!(self, Self::Integer) {
            ValueClass::Integer
        } else if self.is_numeric() {
            ValueClass::BigDecimal
        } else if self.is_date() {
            ValueClass::Timestamp
        } else {
            match self {
                Self::YesNo => ValueClass::Boolean,
                Self::Button => ValueClass::String,
                Self::Binary => ValueClass::Bytes,
                _ => ValueClass::Object,
            }
        }
    }
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DisplayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<i32>() {
            return Self::from_code(code).ok_or_else(|| format!("unknown display type code {}", code));
        }
        DISPLAY_TYPES
            .iter()
            .find(|(_, _, name)| name.eq_ignore_ascii_case(s))
            .map(|(dt, _, _)| *dt)
            .ok_or_else(|| format!("unknown display type '{}'", s))
    }
}

impl Serialize for DisplayType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Metadata files may give a numeric code or a name.
#[derive(Deserialize)]
#[serde(untagged)]
enum CodeOrName {
    Code(i32),
    Name(String),
}

impl TryFrom<CodeOrName> for DisplayType {
    type Error = String;

    fn try_from(value: CodeOrName) -> Result<Self, Self::Error> {
        match value {
            CodeOrName::Code(code) => {
                Self::from_code(code).ok_or_else(|| format!("unknown display type code {}", code))
            }
            CodeOrName::Name(name) => name.parse(),
        }
    }
}

/// Semantic class of a column value at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueClass {
    String,
    Integer,
    BigDecimal,
    Timestamp,
    Boolean,
    Bytes,
    Object,
}

impl ValueClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueClass::String => "string",
            ValueClass::Integer => "integer",
            ValueClass::BigDecimal => "decimal",
            ValueClass::Timestamp => "timestamp",
            ValueClass::Boolean => "boolean",
            ValueClass::Bytes => "bytes",
            ValueClass::Object => "object",
        }
    }
}

impl fmt::Display for ValueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Data access level of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "CodeOrName")]
pub enum AccessLevel {
    Organization,
    ClientOnly,
    #[default]
    ClientOrganization,
    SystemOnly,
    SystemClient,
    All,
}

const ACCESS_LEVELS: &[(AccessLevel, i32, &str, &str)] = &[
    (AccessLevel::Organization, 1, "organization", "1 - Org"),
    (AccessLevel::ClientOnly, 2, "client", "2 - Client"),
    (AccessLevel::ClientOrganization, 3, "client-org", "3 - Client - Org"),
    (AccessLevel::SystemOnly, 4, "system", "4 - System"),
    (AccessLevel::SystemClient, 6, "system-client", "6 - System - Client"),
    (AccessLevel::All, 7, "all", "7 - All"),
];

impl AccessLevel {
    fn entry(&self) -> &'static (AccessLevel, i32, &'static str, &'static str) {
        ACCESS_LEVELS
            .iter()
            .find(|(level, _, _, _)| level == self)
            .unwrap_or(&ACCESS_LEVELS[2])
    }

    pub fn code(&self) -> i32 {
        self.entry().1
    }

    pub fn as_str(&self) -> &'static str {
        self.entry().2
    }

    /// Human-readable description, e.g. `3 - Client - Org`.
    pub fn description(&self) -> &'static str {
        self.entry().3
    }

    pub fn from_code(code: i32) -> Option<Self> {
        ACCESS_LEVELS
            .iter()
            .find(|(_, c, _, _)| *c == code)
            .map(|(level, _, _, _)| *level)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl FromStr for AccessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<i32>() {
            return Self::from_code(code).ok_or_else(|| format!("unknown access level {}", code));
        }
        ACCESS_LEVELS
            .iter()
            .find(|(_, _, name, _)| name.eq_ignore_ascii_case(s))
            .map(|(level, _, _, _)| *level)
            .ok_or_else(|| {
                format!(
                    "unknown access level '{}', expected one of: organization, client, client-org, system, system-client, all",
                    s
                )
            })
    }
}

impl TryFrom<CodeOrName> for AccessLevel {
    type Error = String;

    fn try_from(value: CodeOrName) -> Result<Self, Self::Error> {
        match value {
            CodeOrName::Code(code) => {
                Self::from_code(code).ok_or_else(|| format!("unknown access level {}", code))
            }
            CodeOrName::Name(name) => name.parse(),
        }
    }
}

impl Serialize for AccessLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_type_codes() {
        assert_eq!(DisplayType::String.code(), 10);
        assert_eq!(DisplayType::Id.code(), 13);
        assert_eq!(DisplayType::PrinterName.code(), 42);
        assert_eq!(DisplayType::from_code(19), Some(DisplayType::TableDir));
        assert_eq!(DisplayType::from_code(26), None);
    }

    #[test]
    fn test_display_type_from_str() {
        assert_eq!("YesNo".parse::<DisplayType>().unwrap(), DisplayType::YesNo);
        assert_eq!("yesno".parse::<DisplayType>().unwrap(), DisplayType::YesNo);
        assert_eq!("30".parse::<DisplayType>().unwrap(), DisplayType::Search);
        assert!("Widget".parse::<DisplayType>().is_err());
        assert!("99".parse::<DisplayType>().is_err());
    }

    #[test]
    fn test_display_type_value_class() {
        assert_eq!(DisplayType::String.value_class(), ValueClass::String);
        assert_eq!(DisplayType::List.value_class(), ValueClass::String);
        assert_eq!(DisplayType::TableDir.value_class(), ValueClass::Integer);
        assert_eq!(DisplayType::Integer.value_class(), ValueClass::Integer);
        assert_eq!(DisplayType::Amount.value_class(), ValueClass::BigDecimal);
        assert_eq!(DisplayType::DateTime.value_class(), ValueClass::Timestamp);
        assert_eq!(DisplayType::YesNo.value_class(), ValueClass::Boolean);
        assert_eq!(DisplayType::Binary.value_class(), ValueClass::Bytes);
        assert_eq!(DisplayType::Button.value_class(), ValueClass::String);
        assert_eq!(DisplayType::TextLong.value_class(), ValueClass::String);
    }

    #[test]
    fn test_is_id() {
        assert!(DisplayType::Search.is_id());
        assert!(DisplayType::Location.is_id());
        assert!(!DisplayType::Integer.is_id());
        assert!(!DisplayType::List.is_id());
    }

    #[test]
    fn test_access_level() {
        assert_eq!(AccessLevel::ClientOrganization.code(), 3);
        assert_eq!(AccessLevel::SystemClient.description(), "6 - System - Client");
        assert_eq!("system".parse::<AccessLevel>().unwrap(), AccessLevel::SystemOnly);
        assert_eq!("7".parse::<AccessLevel>().unwrap(), AccessLevel::All);
        assert!("5".parse::<AccessLevel>().is_err());
        assert_eq!(AccessLevel::default(), AccessLevel::ClientOrganization);
    }

    #[test]
    fn test_deserialize_code_or_name() {
        #[derive(Deserialize)]
        struct Column {
            display_type: DisplayType,
            access_level: AccessLevel,
        }

        let by_name: Column =
            toml::from_str("display_type = \"Amount\"\naccess_level = \"client\"").unwrap();
        assert_eq!(by_name.display_type, DisplayType::Amount);
        assert_eq!(by_name.access_level, AccessLevel::ClientOnly);

        let by_code: Column =
            serde_json::from_str(r#"{"display_type": 20, "access_level": 4}"#).unwrap();
        assert_eq!(by_code.display_type, DisplayType::YesNo);
        assert_eq!(by_code.access_level, AccessLevel::SystemOnly);
    }

    #[test]
    fn test_serialize() {
        #[derive(Serialize)]
        struct Column {
            display_type: DisplayType,
        }
        let out = toml::to_string(&Column {
            display_type: DisplayType::TableDir,
        })
        .unwrap();
        assert_eq!(out.trim(), r#"display_type = "TableDir""#);
    }
}
