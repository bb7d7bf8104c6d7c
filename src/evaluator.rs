//! Password strength evaluator - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::SECTIONS;
use crate::types::{PasswordEvaluation, PasswordScore};

/// Scores a password from 0 to 100.
///
/// An empty password scores 0. Otherwise the length and character
/// variety sections are summed and capped at 100.
///
/// Length is counted in `char`s, not bytes or UTF-16 units.
///
/// # Example
///
/// ```rust
/// use pwd_forge::calculate_password_strength;
///
/// assert_eq!(calculate_password_strength(""), 0);
/// assert_eq!(calculate_password_strength("abc"), 22);
/// ```
pub fn calculate_password_strength(password: &str) -> u8 {
    score_sections(password, |_| {}).value()
}

/// Evaluates a password and returns its score with the reasons it lost points.
///
/// The score always equals [`calculate_password_strength`] on the same text.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let pwd = password.expose_secret();
    let mut reasons = Vec::new();

    let score = score_sections(pwd, |reason| reasons.push(reason));

    PasswordEvaluation { score, reasons }
}

fn score_sections(password: &str, mut on_reason: impl FnMut(String)) -> PasswordScore {
    if password.is_empty() {
        on_reason("Password is empty".to_string());
        return PasswordScore::new(0);
    }

    let mut total: i64 = 0;
    for (_section_name, section_fn) in SECTIONS {
        let result = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!("Section {} awarded {} points", _section_name, result.points);

        total += i64::from(result.points);
        if let Some(reason) = result.reason {
            on_reason(reason);
        }
    }

    PasswordScore::new(total)
}
