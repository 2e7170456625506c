//! Locating the livespec marker region.
//!
//! The region runs from the first start marker to the first end marker
//! that follows it, both markers included:
//! ```text
//! <!-- LIVESPEC:START -->
//! content here
//! <!-- LIVESPEC:END -->
//! ```

use std::ops::Range;

use crate::error::{Error, Result};

/// Opening marker of the managed region.
pub const START_MARKER: &str = "<!-- LIVESPEC:START -->";

/// Closing marker of the managed region.
pub const END_MARKER: &str = "<!-- LIVESPEC:END -->";

/// Byte span of a marker region within a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRegion {
    /// Byte offset of the first character of the start marker.
    pub start: usize,
    /// Byte offset one past the last character of the end marker.
    pub end: usize,
}

impl MarkerRegion {
    /// The full span, markers included.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The text between the two markers, without the markers.
    pub fn body<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start + START_MARKER.len()..self.end - END_MARKER.len()]
    }
}

/// Finds the marker region in `content`.
///
/// # Returns
/// - `Ok(None)` when there is no start marker.
/// - `Ok(Some(region))` for a well-formed region.
///
/// # Errors
/// Returns `Error::MalformedRegion` when a start marker is present but no
/// end marker follows it. An end marker appearing only before the start
/// marker does not close the region.
///
/// # Example
/// ```
/// use livespec_blocks::parser::find_region;
///
/// let content = "intro\n<!-- LIVESPEC:START -->\nmanaged\n<!-- LIVESPEC:END -->\noutro";
/// let region = find_region(content).unwrap().unwrap();
/// assert_eq!(region.body(content), "\nmanaged\n");
/// assert!(content[region.end..].starts_with("\noutro"));
/// ```
pub fn find_region(content: &str) -> Result<Option<MarkerRegion>> {
    let Some(start) = content.find(START_MARKER) else {
        return Ok(None);
    };

    let search_from = start + START_MARKER.len();
    let Some(offset) = content[search_from..].find(END_MARKER) else {
        return Err(Error::MalformedRegion { start });
    };

    let end = search_from + offset + END_MARKER.len();
    Ok(Some(MarkerRegion { start, end }))
}

/// Checks whether `content` contains the start marker.
///
/// This says nothing about whether the region is well-formed.
pub fn has_start_marker(content: &str) -> bool {
    content.contains(START_MARKER)
}
