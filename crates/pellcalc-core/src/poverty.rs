//! Poverty guideline lookup.
//!
//! Annual income thresholds [USD] by household size, sizes 1 through 8.

/// Thresholds for household sizes 1..=8.
pub const POVERTY_GUIDELINES: [f64; 8] = [
    11_670.0, 15_730.0, 19_790.0, 23_850.0, 27_910.0, 31_970.0, 36_030.0, 40_090.0,
];

pub const MIN_HOUSEHOLD: f64 = 1.0;
pub const MAX_HOUSEHOLD: f64 = 8.0;

/// Poverty threshold for a household.
///
/// Size is floored, then clamped to [1, 8]; there is no extrapolation past
/// eight members. Non-finite sizes fall to the smallest household.
#[inline]
pub fn poverty_threshold(household_size: f64) -> f64 {
    let n = if household_size.is_finite() {
        household_size.floor().clamp(MIN_HOUSEHOLD, MAX_HOUSEHOLD)
    } else if household_size == f64::INFINITY {
        MAX_HOUSEHOLD
    } else {
        MIN_HOUSEHOLD
    };
    POVERTY_GUIDELINES[n as usize - 1]
}
