//! Exhaustive shift search with optional frequency scoring
//!
//! All 32 shifts are tried in order 0..=31. With a reference text, the shift
//! whose decryption has the closest frequency profile wins, ties going to the
//! lowest shift. Without one, the candidates are handed to a selection
//! callback (typically a human at a prompt).

use std::ops::Deref;

use tracing::{debug, warn};

use crate::alphabet::ALPHABET_SIZE;
use crate::cipher::decrypt;
use crate::error::{CaesarError, Result};
use crate::frequency::{FrequencyProfile, calculate_frequency, compare_frequencies};

/// A single trial decryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub shift: i32,
    pub text: String,
}

/// All trial decryptions of one ciphertext, ordered by shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    /// Candidate for `shift`, if it lies in 0..=31.
    pub fn get(&self, shift: i32) -> Option<&Candidate> {
        usize::try_from(shift)
            .ok()
            .and_then(|index| self.candidates.get(index))
    }

    pub fn into_inner(self) -> Vec<Candidate> {
        self.candidates
    }
}

impl Deref for CandidateSet {
    type Target = [Candidate];

    fn deref(&self) -> &[Candidate] {
        &self.candidates
    }
}

/// Outcome of a brute-force decryption.
#[derive(Debug, Clone, PartialEq)]
pub struct Decryption {
    pub shift: i32,
    pub text: String,
    /// Profile distance to the reference; `None` for a manual selection.
    pub distance: Option<f64>,
}

/// Decrypts `encrypted` with every shift 0..=31.
pub fn candidates(encrypted: &str) -> CandidateSet {
    let candidates = (0..ALPHABET_SIZE)
        .map(|shift| Candidate {
            shift,
            text: decrypt(encrypted, shift),
        })
        .collect();

    CandidateSet { candidates }
}

/// Distance of every candidate's profile to the reference profile, in shift order.
///
/// # Errors
///
/// `CaesarError::EmptyFrequencyInput` if `reference` has no Cyrillic letters.
pub fn rank(encrypted: &str, reference: &str) -> Result<Vec<(i32, f64)>> {
    let reference = reference_profile(reference)?;
    Ok(score(&candidates(encrypted), &reference))
}

/// Recovers the shift of `encrypted` by trying all 32 possibilities.
///
/// # Arguments
///
/// * `encrypted` - The ciphertext.
/// * `reference` - Optional sample of plain text in the same language. When
///   present the best shift is chosen automatically.
/// * `select` - Called with the full candidate set only when `reference` is
///   `None`. Returns the chosen shift, or `None` if nothing was chosen.
///
/// # Errors
///
/// * `CaesarError::EmptyFrequencyInput` - the reference has no Cyrillic letters.
/// * `CaesarError::InvalidSelection` - the callback chose nothing, or a shift
///   outside 0..=31.
pub fn brute_force_decrypt<F>(
    encrypted: &str,
    reference: Option<&str>,
    select: F,
) -> Result<Decryption>
where
    F: FnOnce(&CandidateSet) -> Option<i32>,
{
    match reference {
        Some(reference) => best_match(encrypted, reference),
        None => manual_selection(encrypted, select),
    }
}

fn reference_profile(reference: &str) -> Result<FrequencyProfile> {
    let profile = calculate_frequency(reference);
    if profile.is_empty() {
        return Err(CaesarError::EmptyFrequencyInput);
    }
    Ok(profile)
}

fn score(candidates: &CandidateSet, reference: &FrequencyProfile) -> Vec<(i32, f64)> {
    candidates
        .iter()
        .map(|candidate| {
            let profile = calculate_frequency(&candidate.text);
            (candidate.shift, compare_frequencies(&profile, reference))
        })
        .collect()
}

fn best_match(encrypted: &str, reference: &str) -> Result<Decryption> {
    let reference = reference_profile(reference)?;
    let candidates = candidates(encrypted);

    // Strict less-than keeps the first (lowest) shift on ties
    let (best_shift, best_distance) = score(&candidates, &reference).into_iter().fold(
        (0, f64::MAX),
        |best, (shift, distance)| {
            if distance < best.1 {
                (shift, distance)
            } else {
                best
            }
        },
    );

    debug!(shift = best_shift, distance = best_distance, "Selected shift by frequency analysis");

    let text = candidates
        .into_inner()
        .swap_remove(best_shift as usize)
        .text;

    Ok(Decryption {
        shift: best_shift,
        text,
        distance: Some(best_distance),
    })
}

fn manual_selection<F>(encrypted: &str, select: F) -> Result<Decryption>
where
    F: FnOnce(&CandidateSet) -> Option<i32>,
{
    let candidates = candidates(encrypted);
    let selection = select(&candidates);

    let Some(shift) = selection.filter(|shift| (0..ALPHABET_SIZE).contains(shift)) else {
        warn!(?selection, "Rejected shift selection");
        return Err(CaesarError::InvalidSelection(selection));
    };

    debug!(shift, "Selected shift manually");

    let text = candidates
        .into_inner()
        .swap_remove(shift as usize)
        .text;

    Ok(Decryption {
        shift,
        text,
        distance: None,
    })
}
