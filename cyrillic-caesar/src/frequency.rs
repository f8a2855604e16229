//! Letter frequency profiles for Cyrillic text

use std::collections::BTreeMap;

use crate::alphabet::fold_case;

/// Relative frequency of each lowercase Cyrillic letter in a text.
///
/// Only ring letters (а-я, А-Я) are counted; every other character is
/// excluded from both the counts and the total. A text without any ring
/// letter produces an empty profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyProfile {
    frequencies: BTreeMap<char, f64>,
}

impl FrequencyProfile {
    /// Frequency of `letter`, if it occurred.
    pub fn get(&self, letter: char) -> Option<f64> {
        self.frequencies.get(&letter).copied()
    }

    /// Iterates over `(letter, frequency)` pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.frequencies.iter().map(|(&letter, &freq)| (letter, freq))
    }

    /// Letters present in the profile, in alphabetical order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.frequencies.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Sum of all frequencies. 1.0 (within rounding) for any non-empty profile.
    pub fn total(&self) -> f64 {
        self.frequencies.values().sum()
    }

    /// Distance from `self` to `other`, summed over the letters of `self` only.
    ///
    /// Letters that appear in `other` but not in `self` contribute nothing,
    /// so `a.distance_to(&b)` and `b.distance_to(&a)` generally differ.
    pub fn distance_to(&self, other: &FrequencyProfile) -> f64 {
        self.iter()
            .map(|(letter, freq)| (freq - other.get(letter).unwrap_or(0.0)).abs())
            .sum()
    }
}

impl FromIterator<(char, f64)> for FrequencyProfile {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        Self {
            frequencies: iter.into_iter().collect(),
        }
    }
}

/// Computes the frequency profile of `text`.
///
/// # Arguments
///
/// * `text` - The input text to analyze.
///
/// # Returns
///
/// A `FrequencyProfile` keyed by lowercase letter. Empty if `text` has no
/// Cyrillic ring letters.
pub fn calculate_frequency(text: &str) -> FrequencyProfile {
    let counts: BTreeMap<char, u32> = text.chars().filter_map(fold_case).fold(
        BTreeMap::new(),
        |mut counts, letter| {
            *counts.entry(letter).or_insert(0) += 1;
            counts
        },
    );

    let total: u32 = counts.values().sum();
    if total == 0 {
        return FrequencyProfile::default();
    }

    counts
        .into_iter()
        .map(|(letter, count)| (letter, count as f64 / total as f64))
        .collect()
}

/// Asymmetric distance between two profiles: `Σ |a[k] - b[k]|` over the keys of `a`.
pub fn compare_frequencies(a: &FrequencyProfile, b: &FrequencyProfile) -> f64 {
    a.distance_to(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_frequency_counts_case_folded() {
        let profile = calculate_frequency("АаБ");
        assert_eq!(profile.len(), 2);
        assert!((profile.get('а').unwrap() - 2.0 / 3.0).abs() < EPSILON);
        assert!((profile.get('б').unwrap() - 1.0 / 3.0).abs() < EPSILON);
        assert_eq!(profile.get('А'), None);
    }

    #[test]
    fn test_frequency_ignores_non_cyrillic() {
        let profile = calculate_frequency("да, yes 42! ё");
        assert_eq!(profile.letters().collect::<Vec<_>>(), vec!['а', 'д']);
        assert!((profile.get('д').unwrap() - 0.5).abs() < EPSILON);
        assert!((profile.get('а').unwrap() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_frequency_sum_is_one() {
        let profile = calculate_frequency("Широкая электрификация южных губерний даст мощный толчок подъёму сельского хозяйства");
        assert!((profile.total() - 1.0).abs() < EPSILON);
        assert!(profile.iter().all(|(_, f)| (0.0..=1.0).contains(&f)));
    }

    #[test]
    fn test_frequency_without_cyrillic_is_empty() {
        assert!(calculate_frequency("").is_empty());
        assert!(calculate_frequency("Latin only, 123.").is_empty());
        assert_eq!(calculate_frequency("ёЁ").total(), 0.0);
    }

    #[test]
    fn test_compare_frequencies_is_asymmetric() {
        let a: FrequencyProfile = [('а', 0.5)].into_iter().collect();
        let b: FrequencyProfile = [('а', 0.3), ('б', 0.2)].into_iter().collect();

        assert!((compare_frequencies(&a, &b) - 0.2).abs() < EPSILON);
        assert!((compare_frequencies(&b, &a) - 0.4).abs() < EPSILON);
    }

    #[test]
    fn test_compare_identical_profiles() {
        let profile = calculate_frequency("съешь же ещё этих мягких булок");
        assert_eq!(compare_frequencies(&profile, &profile), 0.0);
    }

    #[test]
    fn test_compare_empty_profiles() {
        let empty = FrequencyProfile::default();
        let some = calculate_frequency("абв");
        assert_eq!(compare_frequencies(&empty, &some), 0.0);
        assert!((compare_frequencies(&some, &empty) - 1.0).abs() < EPSILON);
    }
}
