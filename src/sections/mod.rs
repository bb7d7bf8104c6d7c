//! Password scoring sections
//!
//! Each section scores a specific aspect of password strength.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

/// Outcome of a single scoring section.
/// - `points` - contribution to the strength score
/// - `reason` - why the section did not award full marks, if it matters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResult {
    pub points: u32,
    pub reason: Option<String>,
}

/// Scoring sections in evaluation order.
pub const SECTIONS: [(&str, fn(&str) -> SectionResult); 2] = [
    ("length", length_section),
    ("variety", character_variety_section),
];
