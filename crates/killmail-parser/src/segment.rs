//! Paragraph splitting and section marker resolution
//!
//! A killmail has no delimiters beyond blank lines. The text is cut into
//! paragraphs, then three marker phrases locate where the attacker list and
//! the two item lists begin. Each section runs from the paragraph after its
//! marker up to the paragraph holding the next marker, or to the end of the
//! input when no marker follows.

use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

/// Marker opening the attacker list
pub const INVOLVED_MARKER: &str = "Involved parties";

/// Marker opening the destroyed items list
pub const DESTROYED_MARKER: &str = "Destroyed items";

/// Marker opening the dropped items list
pub const DROPPED_MARKER: &str = "Dropped items";

lazy_static! {
    // One or more blank lines, LF or CRLF
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").unwrap();
}

/// Split text into paragraphs on blank lines
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK.split(text).collect()
}

/// Sections introduced by a marker paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Attacker blocks, one per paragraph
    Attackers,
    /// Destroyed items, one per line
    Destroyed,
    /// Dropped items, one per line
    Dropped,
}

impl Section {
    /// All sections in canonical order
    pub const ALL: [Section; 3] = [Section::Attackers, Section::Destroyed, Section::Dropped];

    /// Marker phrase that opens this section
    pub fn marker(self) -> &'static str {
        match self {
            Section::Attackers => INVOLVED_MARKER,
            Section::Destroyed => DESTROYED_MARKER,
            Section::Dropped => DROPPED_MARKER,
        }
    }
}

/// Where a marker phrase was found
///
/// Ordered by paragraph, then by byte offset inside the paragraph, so two
/// markers sharing one paragraph still have a definite order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MarkerPosition {
    /// Zero-based paragraph index
    pub paragraph: usize,
    /// Byte offset of the marker within the paragraph
    pub offset: usize,
}

/// Resolved marker positions for one killmail
///
/// A marker that is not present is `None`; it never aliases the first
/// paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    /// Position of `Involved parties`
    pub involved: Option<MarkerPosition>,
    /// Position of `Destroyed items`
    pub destroyed: Option<MarkerPosition>,
    /// Position of `Dropped items`
    pub dropped: Option<MarkerPosition>,
    /// Number of paragraphs in the input
    pub paragraph_count: usize,
}

impl SectionLayout {
    /// Locate the first paragraph holding each marker
    pub fn locate(paragraphs: &[&str]) -> Self {
        let find = |marker: &str| {
            paragraphs.iter().enumerate().find_map(|(paragraph, text)| {
                text.find(marker)
                    .map(|offset| MarkerPosition { paragraph, offset })
            })
        };

        Self {
            involved: find(INVOLVED_MARKER),
            destroyed: find(DESTROYED_MARKER),
            dropped: find(DROPPED_MARKER),
            paragraph_count: paragraphs.len(),
        }
    }

    /// Position of a section's marker, if present
    pub fn marker(&self, section: Section) -> Option<MarkerPosition> {
        match section {
            Section::Attackers => self.involved,
            Section::Destroyed => self.destroyed,
            Section::Dropped => self.dropped,
        }
    }

    /// Earliest marker of any section
    pub fn first_marker(&self) -> Option<MarkerPosition> {
        Section::ALL.iter().filter_map(|s| self.marker(*s)).min()
    }

    /// Whole paragraphs before the first marker
    ///
    /// The marker paragraph may also start with header lines; see
    /// [`SectionLayout::first_marker`] for where they end.
    pub fn header_range(&self) -> Range<usize> {
        let end = self
            .first_marker()
            .map(|m| m.paragraph)
            .unwrap_or(self.paragraph_count);
        0..end
    }

    /// Body paragraphs of a section
    ///
    /// `None` when the section's marker is absent. Otherwise the range starts
    /// after the marker paragraph and stops at the paragraph of the next
    /// marker, or at the end of input. A section whose successor shares its
    /// marker paragraph is empty.
    pub fn range(&self, section: Section) -> Option<Range<usize>> {
        let start = self.marker(section)?;
        let next = Section::ALL
            .iter()
            .filter_map(|s| self.marker(*s))
            .filter(|m| *m > start)
            .min();

        let body_start = start.paragraph + 1;
        let body_end = next
            .map(|m| m.paragraph)
            .unwrap_or(self.paragraph_count)
            .max(body_start);
        Some(body_start..body_end)
    }
}
