//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use crate::charset::CharacterClass;
use super::SectionResult;

fn class_points(class: CharacterClass) -> u32 {
    match class {
        CharacterClass::Lowercase => 10,
        CharacterClass::Uppercase => 15,
        CharacterClass::Numbers => 15,
        CharacterClass::SpecialChars => 20,
    }
}

/// Scores the character classes present in the password.
///
/// # Returns
/// - `reason` listing the missing classes, if any
pub fn character_variety_section(password: &str) -> SectionResult {
    let mut points = 0;
    let mut missing = Vec::new();

    for class in CharacterClass::ALL {
        if class.is_present_in(password) {
            points += class_points(class);
        } else {
            missing.push(class.label());
        }
    }

    let reason = (!missing.is_empty()).then(|| format!("Missing: {}", missing.join(", ")));

    SectionResult { points, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = character_variety_section("lowercase123!");
        assert_eq!(result.points, 45);
        assert!(result.reason.unwrap().contains("uppercase"));
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let result = character_variety_section("UPPERCASE123!");
        assert_eq!(result.points, 50);
        assert!(result.reason.unwrap().contains("lowercase"));
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        let result = character_variety_section("NoNumbers!");
        assert_eq!(result.points, 45);
        assert!(result.reason.unwrap().contains("numbers"));
    }

    #[test]
    fn test_variety_section_missing_special() {
        let result = character_variety_section("NoSpecial123");
        assert_eq!(result.points, 40);
        assert!(result.reason.unwrap().contains("special"));
    }

    #[test]
    fn test_variety_section_all_categories() {
        let result = character_variety_section("HasAll123!@#");
        assert_eq!(result, SectionResult { points: 60, reason: None });
    }

    #[test]
    fn test_variety_section_ignores_unlisted_symbols() {
        // Space and non-ASCII letters belong to no class.
        let result = character_variety_section(" é");
        assert_eq!(result.points, 0);
        assert_eq!(
            result.reason,
            Some("Missing: uppercase, lowercase, numbers, special characters".to_string())
        );
    }
}
