//! Section writing for the livespec marker region.
//!
//! All functions take the full section text, markers included, and return
//! the new file content. Text outside the region is never touched.

use crate::error::Result;
use crate::parser::{END_MARKER, MarkerRegion, START_MARKER, find_region};

/// Wraps a section body in the start and end markers.
///
/// Trailing newlines of `body` are dropped so that the section always ends
/// exactly at the end marker.
///
/// # Example
/// ```
/// use livespec_blocks::writer::wrap_section;
///
/// let section = wrap_section("# Livespec\n");
/// assert_eq!(section, "<!-- LIVESPEC:START -->\n# Livespec\n<!-- LIVESPEC:END -->");
/// ```
pub fn wrap_section(body: &str) -> String {
    format!(
        "{}\n{}\n{}",
        START_MARKER,
        body.trim_end_matches(['\n', '\r']),
        END_MARKER
    )
}

/// Puts `section` in front of `content`, separated by a blank line.
pub fn prepend_section(content: &str, section: &str) -> String {
    format!("{}\n\n{}", section, content)
}

/// Replaces `region` of `content` with `section`.
///
/// Bytes before `region.start` and from `region.end` on are kept as-is.
pub fn replace_region(content: &str, region: &MarkerRegion, section: &str) -> String {
    let mut out =
        String::with_capacity(content.len() - (region.end - region.start) + section.len());
    out.push_str(&content[..region.start]);
    out.push_str(section);
    out.push_str(&content[region.end..]);
    out
}

/// Replaces the existing region, or prepends the section when there is none.
///
/// # Errors
/// Returns `Error::MalformedRegion` when the content has a start marker
/// without an end marker; nothing is rewritten in that case.
///
/// # Example
/// ```
/// use livespec_blocks::writer::{upsert_section, wrap_section};
///
/// let section = wrap_section("v1");
/// let content = upsert_section("# Mine", &section).unwrap();
/// assert!(content.starts_with("<!-- LIVESPEC:START -->"));
///
/// let content = upsert_section(&content, &wrap_section("v2")).unwrap();
/// assert!(content.contains("v2"));
/// assert!(!content.contains("v1"));
/// assert!(content.ends_with("# Mine"));
/// ```
pub fn upsert_section(content: &str, section: &str) -> Result<String> {
    Ok(match find_region(content)? {
        Some(region) => replace_region(content, &region, section),
        None => prepend_section(content, section),
    })
}
