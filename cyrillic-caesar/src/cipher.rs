//! Caesar encryption and decryption over whole texts

use crate::alphabet::shift_char;

/// Encrypts `text` by shifting every Cyrillic letter `shift` positions within its ring.
///
/// # Arguments
///
/// * `text` - The input text. Anything that is not а-я/А-Я is copied verbatim.
/// * `shift` - The key. Any `i32` is valid and is taken modulo 32.
///
/// # Returns
///
/// A `String` with the same number of characters as `text`.
pub fn encrypt(text: &str, shift: i32) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}

/// Decrypts `text` that was encrypted with `shift`.
///
/// This is `encrypt` with the negated shift.
pub fn decrypt(text: &str, shift: i32) -> String {
    // -i32::MIN overflows; wrapping keeps it congruent mod 32
    encrypt(text, shift.wrapping_neg())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Ring;

    const MIXED: &str = "Съешь же ещё этих мягких французских булок, да выпей чаю! Latin 123\n\t—ЁёЯя";

    #[test]
    fn test_encrypt_privet() {
        assert_eq!(encrypt("Привет", 1), "Рсйгжу");
    }

    #[test]
    fn test_decrypt_privet() {
        assert_eq!(decrypt(&encrypt("Привет", 5), 5), "Привет");
    }

    #[test]
    fn test_round_trip() {
        for shift in [-100, -33, -32, -1, 0, 1, 7, 31, 32, 45, 1000, i32::MAX, i32::MIN] {
            assert_eq!(decrypt(&encrypt(MIXED, shift), shift), MIXED, "shift {shift}");
        }
    }

    #[test]
    fn test_periodicity() {
        for shift in -40..40 {
            assert_eq!(encrypt(MIXED, shift), encrypt(MIXED, shift + 32));
        }
    }

    #[test]
    fn test_case_and_structure_preserved() {
        let encrypted = encrypt(MIXED, 13);
        assert_eq!(encrypted.chars().count(), MIXED.chars().count());

        for (original, shifted) in MIXED.chars().zip(encrypted.chars()) {
            match Ring::of(original) {
                Some(ring) => assert_eq!(Ring::of(shifted), Some(ring)),
                None => assert_eq!(original, shifted),
            }
        }
    }

    #[test]
    fn test_zero_shift_is_identity() {
        assert_eq!(encrypt(MIXED, 0), MIXED);
        assert_eq!(encrypt("", 12), "");
    }

    #[test]
    fn test_decrypt_is_negated_encrypt() {
        assert_eq!(decrypt(MIXED, 9), encrypt(MIXED, -9));
    }
}
