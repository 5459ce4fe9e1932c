//! Pell formula constants [USD].

/// Maximum award.
pub const MAX_GRANT: f64 = 5775.0;

/// Raw grants below this are zeroed.
pub const ROUND_LOWER: f64 = 288.0;

/// Minimum payable award; raw grants in [ROUND_LOWER, ROUND_UPPER) snap here.
pub const ROUND_UPPER: f64 = 577.0;

/// Half award paid to independent students in the Hamilton Project middle band.
pub const HALF_GRANT: f64 = 2888.0;

// -- Phase-out band, as multiples of the poverty threshold --

/// Full award at or below this multiple.
pub const PHASE_OUT_START: f64 = 1.5;

/// Award reaches zero at this multiple.
pub const PHASE_OUT_END: f64 = 2.5;

/// Hamilton Project: independent students get the full award below this multiple.
pub const HAMILTON_FULL_LIMIT: f64 = 2.0;
