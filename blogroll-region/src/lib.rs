//! # blogroll-region
//!
//! Locate and replace a delimited region inside a text document.
//!
//! The document is treated as an immutable value: [`locate`] reports byte
//! offsets of the first well-formed marker pair, [`replace`] produces a new
//! document with only the region interior swapped out. Everything outside the
//! markers is preserved byte-for-byte, and re-applying a replacement with
//! identical content is a no-op at the byte level.
//!
//! Matching is whole-text literal substring search; markers do not need to
//! sit on their own line.

pub mod error;

pub use error::RegionError;

use blogroll_core::types::MarkerPair;

/// Byte offsets of a located marker pair.
///
/// `open_start..open_end` spans the opening marker, `close_start..close_end`
/// the closing one. The region interior is `open_end..close_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found {
    pub open_start: usize,
    pub open_end: usize,
    pub close_start: usize,
    pub close_end: usize,
}

impl Found {
    /// The current interior of the region, markers excluded.
    pub fn interior<'a>(&self, document: &'a str) -> &'a str {
        &document[self.open_end..self.close_start]
    }
}

/// Find the first well-formed marker pair in `document`.
///
/// The opening marker is the first occurrence of its token anywhere in the
/// text; the closing marker is the first occurrence of its token strictly
/// after the opening marker's end. Later duplicate pairs are ignored.
pub fn locate(document: &str, markers: &MarkerPair) -> Result<Found, RegionError> {
    let open_start =
        document
            .find(markers.opening())
            .ok_or_else(|| RegionError::MissingOpeningMarker {
                marker: markers.opening().to_string(),
            })?;
    let open_end = open_start + markers.opening().len();

    let close_rel =
        document[open_end..]
            .find(markers.closing())
            .ok_or_else(|| RegionError::MissingClosingMarker {
                marker: markers.closing().to_string(),
            })?;
    let close_start = open_end + close_rel;
    let close_end = close_start + markers.closing().len();

    Ok(Found {
        open_start,
        open_end,
        close_start,
        close_end,
    })
}

/// Produce a new document with the region interior replaced.
///
/// Output is `document[..open_end] + "\n" + interior + "\n" +
/// document[close_start..]`: markers stay in place, bytes before the opening
/// marker and after the closing marker are untouched, and the original
/// line-ending style of the untouched portions is preserved.
pub fn replace(document: &str, found: &Found, interior: &str) -> String {
    let mut out = String::with_capacity(document.len() + interior.len() + 2);
    out.push_str(&document[..found.open_end]);
    out.push('\n');
    out.push_str(interior);
    out.push('\n');
    out.push_str(&document[found.close_start..]);
    out
}

/// Locate the first marker pair and replace its interior in one step.
pub fn replace_region(
    document: &str,
    markers: &MarkerPair,
    interior: &str,
) -> Result<String, RegionError> {
    let found = locate(document, markers)?;
    Ok(replace(document, &found, interior))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
