//! Generation options.

use crate::charset::CharacterClass;

/// Configuration for [`generate_password`](crate::generate_password).
///
/// Values are not validated on construction. A zero or negative `length`,
/// or every class disabled, is rejected when generating.
///
/// Override individual fields with struct update syntax; the rest keep
/// their defaults:
///
/// ```rust
/// use pwd_forge::PasswordOptions;
///
/// let options = PasswordOptions { length: 20, ..Default::default() };
/// assert!(options.include_special_chars);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: i64,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_special_chars: bool,
}

pub const DEFAULT_PASSWORD_OPTIONS: PasswordOptions = PasswordOptions {
    length: 12,
    include_uppercase: true,
    include_lowercase: true,
    include_numbers: true,
    include_special_chars: true,
};

impl Default for PasswordOptions {
    fn default() -> Self {
        DEFAULT_PASSWORD_OPTIONS
    }
}

impl PasswordOptions {
    pub fn with_length(mut self, length: i64) -> Self {
        self.length = length;
        self
    }

    pub fn with_uppercase(mut self, include: bool) -> Self {
        self.include_uppercase = include;
        self
    }

    pub fn with_lowercase(mut self, include: bool) -> Self {
        self.include_lowercase = include;
        self
    }

    pub fn with_numbers(mut self, include: bool) -> Self {
        self.include_numbers = include;
        self
    }

    pub fn with_special_chars(mut self, include: bool) -> Self {
        self.include_special_chars = include;
        self
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::SpecialChars => self.include_special_chars,
        }
    }

    /// Enabled classes, in character pool order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|&class| self.includes(class))
            .collect()
    }
}
