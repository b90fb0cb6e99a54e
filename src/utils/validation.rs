use log::{debug, warn};

use crate::utils::digits::{Digits, split_into_digits};
use crate::utils::errors::UtilsError;

/// Validate a carriage number and split it into digits.
///
/// Surrounding whitespace is ignored. What remains must be exactly four ASCII digits.
///
/// # Errors
///
/// Returns an error if the trimmed input is empty, is not four characters long,
/// or contains anything other than ASCII digits (signs, decimal points, exponents).
pub fn parse_carriage_number(input: &str) -> Result<Digits, UtilsError> {
    debug!("Validating carriage number: '{}'", input);

    let trimmed = input.trim();
    if trimmed.is_empty() {
        warn!("Carriage number is empty");
        return Err(UtilsError::EmptyInput);
    }

    let length = trimmed.chars().count();
    if length != 4 {
        warn!("Carriage number '{}' has {} characters", trimmed, length);
        return Err(UtilsError::InvalidLength { length });
    }

    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        warn!(
            "Carriage number contains non-digit characters: '{}'",
            trimmed
        );
        return Err(UtilsError::InvalidDigitString(trimmed.to_string()));
    }

    let number = trimmed
        .parse::<u32>()
        .map_err(|_| UtilsError::InvalidDigitString(trimmed.to_string()))?;

    debug!("Carriage number validation successful");
    split_into_digits(number)
}
