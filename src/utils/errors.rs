use thiserror::Error;

/// Errors that can occur while turning user input into a digit sequence
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Carriage number cannot be empty")]
    EmptyInput,
    #[error("Carriage number must have exactly 4 digits, got {length} characters")]
    InvalidLength { length: usize },
    #[error("Carriage number must contain only digits: {0}")]
    InvalidDigitString(String),
    #[error("Number {0} does not fit in 4 digits")]
    NumberOutOfRange(u32),
}
