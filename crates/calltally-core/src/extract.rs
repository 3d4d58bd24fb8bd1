//! Delimited-substring extraction over free-text event content.

/// Left delimiter preceding the code embedded in event response text.
pub const CODE_LEFT_DELIMITER: &str = " number ";

/// Right delimiter terminating the code embedded in event response text.
pub const CODE_RIGHT_DELIMITER: &str = " will appear";

/// Returns the substring strictly between the first occurrence of `left`
/// and the first occurrence of `right` after it.
///
/// `None` when either delimiter is absent. The extracted substring may be
/// empty when `right` immediately follows `left`. Matching is
/// first-left, first-right-after-left; no further disambiguation.
pub fn extract_between<'a>(source: &'a str, left: &str, right: &str) -> Option<&'a str> {
    let start = source.find(left)? + left.len();
    let remainder = &source[start..];
    let end = remainder.find(right)?;
    Some(&remainder[..end])
}
