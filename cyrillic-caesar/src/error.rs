//! Error types for Caesar brute-force operations

use thiserror::Error;

use crate::alphabet::ALPHABET_SIZE;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaesarError {
    #[error("{}", describe_selection(.0))]
    InvalidSelection(Option<i32>),

    #[error("Reference text contains no Cyrillic letters")]
    EmptyFrequencyInput,
}

fn describe_selection(selection: &Option<i32>) -> String {
    match selection {
        Some(shift) => format!(
            "Invalid shift selection {shift} (must be 0-{})",
            ALPHABET_SIZE - 1
        ),
        None => "No shift was selected".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, CaesarError>;
