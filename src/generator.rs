//! Password generator - rejection sampling over the enabled character pool.

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

use crate::charset::CharacterClass;
use crate::options::PasswordOptions;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Password length must be greater than 0 (got {0})")]
    InvalidLength(i64),
    #[error("At least one character type must be selected")]
    NoCharacterSetSelected,
}

/// Builds the character pool for the enabled classes.
///
/// Classes are concatenated as uppercase, lowercase, numbers, special.
pub fn build_char_pool(options: &PasswordOptions) -> Vec<char> {
    options
        .enabled_classes()
        .into_iter()
        .flat_map(|class| class.chars().chars())
        .collect()
}

/// Generates a password using the thread-local random generator.
///
/// `length` must be at least the number of enabled classes: a shorter
/// password can never hold one character of each, and the call never
/// returns.
///
/// # Errors
///
/// Returns error if:
/// - `length` is zero or negative
/// - every character class is disabled
///
/// # Example
///
/// ```rust
/// use pwd_forge::{generate_password, PasswordOptions};
///
/// let password = generate_password(&PasswordOptions::default()).unwrap();
/// assert_eq!(password.chars().count(), 12);
/// ```
pub fn generate_password(options: &PasswordOptions) -> Result<String, GeneratorError> {
    generate_password_with_rng(options, &mut rand::thread_rng())
}

/// Same as [`generate_password`], wrapped in a [`SecretString`].
pub fn generate_secret_password(options: &PasswordOptions) -> Result<SecretString, GeneratorError> {
    generate_password(options).map(|pwd| SecretString::new(pwd.into()))
}

/// Generates a password drawing from the given random generator.
///
/// Every character is an independent uniform draw from the pool. A candidate
/// missing any enabled class is discarded whole and drawn again, so a
/// `length` below the number of enabled classes loops forever.
pub fn generate_password_with_rng<R: Rng + ?Sized>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    let length = validate(options)?;
    let classes = options.enabled_classes();
    let pool = build_char_pool(options);

    #[cfg(feature = "tracing")]
    tracing::debug!("Generating password: length {}, pool of {} chars", length, pool.len());

    #[cfg(feature = "tracing")]
    let mut rejected: u64 = 0;

    loop {
        let candidate: String = (0..length)
            .map(|_| pool[rng.gen_range(0..pool.len())])
            .collect();

        if classes.iter().all(|class| class.is_present_in(&candidate)) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password accepted after {} rejected candidates", rejected);
            return Ok(candidate);
        }

        #[cfg(feature = "tracing")]
        {
            rejected += 1;
        }
    }
}

fn validate(options: &PasswordOptions) -> Result<usize, GeneratorError> {
    if options.length <= 0 {
        #[cfg(feature = "tracing")]
        tracing::warn!("Rejected password options: length {}", options.length);
        return Err(GeneratorError::InvalidLength(options.length));
    }

    if !CharacterClass::ALL.iter().any(|&class| options.includes(class)) {
        #[cfg(feature = "tracing")]
        tracing::warn!("Rejected password options: no character set selected");
        return Err(GeneratorError::NoCharacterSetSelected);
    }

    usize::try_from(options.length).map_err(|_| GeneratorError::InvalidLength(options.length))
}
