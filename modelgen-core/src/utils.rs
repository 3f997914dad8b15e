//! Shared string helpers for naming generated members.

/// Strip `prefix` from `s`, ignoring ASCII case.
pub fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
    {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// Convert a column name to the prefix of a constant name (e.g., "DocStatus" -> "DOCSTATUS")
pub fn to_constant_case(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Reduce arbitrary text to the characters allowed in a Java identifier
/// (e.g., "In Progress" -> "InProgress", "Not-Approved" -> "NotApproved").
pub fn java_identifier(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
