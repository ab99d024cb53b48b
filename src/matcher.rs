//! Case-insensitive substring matching for name searches.
//!
//! Pokemon names are validated to ASCII (letters, spaces, hyphens), so
//! ASCII case folding gives exact case-insensitive containment.

/// Returns `true` iff `needle` occurs as a contiguous substring of
/// `haystack`, comparing ASCII case-insensitively.
///
/// The empty needle matches every haystack.
pub fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}
