//! Character classes used by both the generator and the scorer.

/// The four literal character sets, by class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharSets {
    pub uppercase: &'static str,
    pub lowercase: &'static str,
    pub numbers: &'static str,
    pub special_chars: &'static str,
}

pub const CHAR_SETS: CharSets = CharSets {
    uppercase: "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    lowercase: "abcdefghijklmnopqrstuvwxyz",
    numbers: "0123456789",
    special_chars: "!@#$%^&*()_+~`|}{[]\\:;?><,./-=",
};

/// A character class. Classes are disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    SpecialChars,
}

impl CharacterClass {
    /// All classes, in character pool order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::SpecialChars,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => CHAR_SETS.uppercase,
            CharacterClass::Lowercase => CHAR_SETS.lowercase,
            CharacterClass::Numbers => CHAR_SETS.numbers,
            CharacterClass::SpecialChars => CHAR_SETS.special_chars,
        }
    }

    /// Human-readable name, as used in evaluation reasons.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::SpecialChars => "special characters",
        }
    }

    /// Returns `true` if `text` holds at least one character of this class.
    pub fn is_present_in(self, text: &str) -> bool {
        contains_char_from(text, self.chars())
    }
}

/// Returns `true` if any character of `text` appears in `char_set`.
///
/// Matching is exact (case-sensitive) and stops at the first hit.
/// An empty `text` never matches.
pub fn contains_char_from(text: &str, char_set: &str) -> bool {
    text.chars().any(|c| char_set.contains(c))
}
