//! Password generation and strength scoring library
//!
//! This library generates random passwords guaranteed to contain every
//! selected character class, and scores arbitrary passwords from 0 to 100.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-forge` demo binary
//!
//! # Example
//!
//! ```rust
//! use pwd_forge::{calculate_password_strength, generate_password, PasswordOptions};
//!
//! let options = PasswordOptions { length: 16, ..Default::default() };
//! let password = generate_password(&options).expect("valid options");
//!
//! println!("Password: {}", password);
//! println!("Strength: {}", calculate_password_strength(&password));
//! ```

// Internal modules
mod charset;
mod evaluator;
mod generator;
mod options;
mod sections;
mod types;

// Public API
pub use charset::{contains_char_from, CharSets, CharacterClass, CHAR_SETS};
pub use evaluator::{calculate_password_strength, evaluate_password_strength};
pub use generator::{
    build_char_pool, generate_password, generate_password_with_rng, generate_secret_password,
    GeneratorError,
};
pub use options::{PasswordOptions, DEFAULT_PASSWORD_OPTIONS};
pub use types::{PasswordEvaluation, PasswordScore, PasswordStrength};
