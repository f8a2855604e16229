//! Cyrillic alphabet rings and single-character shifting

/// Number of letters in each Cyrillic ring (а-я without ё).
pub const ALPHABET_SIZE: i32 = 32;

/// One case of the Cyrillic alphabet, treated as a cyclic group of 32 letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ring {
    /// Lowercase а..=я
    Lower,
    /// Uppercase А..=Я
    Upper,
}

impl Ring {
    /// Returns the ring `c` belongs to, or `None` for any other character.
    ///
    /// `ё` and `Ё` lie outside the contiguous а..=я block and are not ring letters.
    pub fn of(c: char) -> Option<Ring> {
        match c {
            'а'..='я' => Some(Ring::Lower),
            'А'..='Я' => Some(Ring::Upper),
            _ => None,
        }
    }

    /// First letter of the ring.
    pub fn base(self) -> char {
        match self {
            Ring::Lower => 'а',
            Ring::Upper => 'А',
        }
    }

    /// Zero-based position of `c` inside this ring.
    fn position(self, c: char) -> i32 {
        c as i32 - self.base() as i32
    }

    /// Letter at `offset`, which must already lie in `0..ALPHABET_SIZE`.
    fn letter_at(self, offset: i32) -> char {
        // Both rings are contiguous BMP blocks, so the sum is always a valid scalar.
        char::from_u32(self.base() as u32 + offset as u32).unwrap_or(self.base())
    }
}

/// Shifts a single character within its ring.
///
/// Characters outside both rings (Latin letters, digits, punctuation,
/// whitespace, `ё`) are returned unchanged. The shift is reduced with
/// floored modulo, so negative and very large shifts wrap correctly.
pub fn shift_char(c: char, shift: i32) -> char {
    match Ring::of(c) {
        Some(ring) => {
            let offset = (ring.position(c) + shift.rem_euclid(ALPHABET_SIZE)) % ALPHABET_SIZE;
            ring.letter_at(offset)
        }
        None => c,
    }
}

/// Folds an uppercase ring letter to its lowercase counterpart.
///
/// Returns `None` for characters outside both rings.
pub fn fold_case(c: char) -> Option<char> {
    match Ring::of(c)? {
        Ring::Lower => Some(c),
        Ring::Upper => Some(Ring::Lower.letter_at(Ring::Upper.position(c))),
    }
}
