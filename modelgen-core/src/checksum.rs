//! serialVersionUID checksum of generated class text.

/// Token emitted in the class header and replaced on write.
pub const CHECKSUM_PLACEHOLDER: &str = "[*serialVersionUID*]";

/// 32-bit string hash over UTF-16 code units (`h = 31 * h + c`), the same
/// value `java.lang.String#hashCode` yields for the text.
pub fn java_string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(i32::from(c)))
}

/// Hash `content` and substitute the hash for the single placeholder.
///
/// Returns the number of placeholders found as the error when it is not
/// exactly one.
pub fn apply_checksum(content: &str) -> Result<(String, i32), usize> {
    let count = content.matches(CHECKSUM_PLACEHOLDER).count();
    if count != 1 {
        return Err(count);
    }
    let hash = java_string_hash(content);
    Ok((content.replace(CHECKSUM_PLACEHOLDER, &hash.to_string()), hash))
}
