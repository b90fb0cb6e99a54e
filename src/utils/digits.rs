use log::debug;

use crate::utils::errors::UtilsError;

/// A carriage number split into its four decimal digits, most significant first.
pub type Digits = [u8; 4];

/// Split a number into exactly four digits, zero-padding on the left.
///
/// # Errors
///
/// Returns an error if the number has more than four decimal digits.
pub fn split_into_digits(number: u32) -> Result<Digits, UtilsError> {
    if number > 9999 {
        return Err(UtilsError::NumberOutOfRange(number));
    }

    let digits = [
        (number / 1000) as u8,
        (number / 100 % 10) as u8,
        (number / 10 % 10) as u8,
        (number % 10) as u8,
    ];
    debug!("Split {} into digits {:?}", number, digits);
    Ok(digits)
}

/// Join digits back into their decimal text, e.g. `[0, 1, 2, 3]` -> `"0123"`.
pub fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}
