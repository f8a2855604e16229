//! # Cyrillic Caesar
//!
//! Caesar (additive) cipher over the Cyrillic alphabet, with brute-force
//! key recovery.
//!
//! ## Alphabet
//!
//! Two independent rings of 32 letters are used: lowercase а-я and uppercase
//! А-Я. Shifting never changes case. `ё`/`Ё`, Latin letters, digits and
//! punctuation are passed through unchanged.
//!
//! ## Usage
//!
//! ```rust
//! use cyrillic_caesar::{brute_force_decrypt, decrypt, encrypt};
//!
//! let encrypted = encrypt("Привет, мир!", 3);
//! assert_eq!(decrypt(&encrypted, 3), "Привет, мир!");
//!
//! // Recover the key by comparing letter frequencies with a sample text
//! let reference = "Привет, мир! Как дела?";
//! let result = brute_force_decrypt(&encrypted, Some(reference), |_| None)?;
//! assert_eq!(result.shift, 3);
//! # Ok::<(), cyrillic_caesar::CaesarError>(())
//! ```
//!
//! Without a reference, the 32 candidates are passed to a selection callback:
//!
//! ```rust
//! use cyrillic_caesar::{brute_force_decrypt, encrypt};
//!
//! let encrypted = encrypt("Тест", 7);
//! let result = brute_force_decrypt(&encrypted, None, |candidates| {
//!     candidates.iter().find(|c| c.text == "Тест").map(|c| c.shift)
//! })?;
//! assert_eq!(result.shift, 7);
//! # Ok::<(), cyrillic_caesar::CaesarError>(())
//! ```

pub mod alphabet;
pub mod brute_force;
pub mod cipher;
pub mod error;
pub mod frequency;

pub use alphabet::{ALPHABET_SIZE, Ring, shift_char};
pub use brute_force::{Candidate, CandidateSet, Decryption, brute_force_decrypt, candidates, rank};
pub use cipher::{decrypt, encrypt};
pub use error::{CaesarError, Result};
pub use frequency::{FrequencyProfile, calculate_frequency, compare_frequencies};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
