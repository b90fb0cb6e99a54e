// Configuration constants for the solver module
pub const DEFAULT_TARGET: f64 = 10.0;
pub const EPSILON: f64 = 1e-9;
pub const HIGHEST_CARRIAGE_NUMBER: u32 = 9999;
