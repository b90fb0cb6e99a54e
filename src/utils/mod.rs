//! Utils module split into submodules

mod digits;
mod errors;
mod permutations;
mod validation;

pub use digits::{Digits, digits_to_string, split_into_digits};
pub use errors::UtilsError;
pub use permutations::{permute, unique_permutations};
pub use validation::parse_carriage_number;
