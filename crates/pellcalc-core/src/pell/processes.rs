/// Pell core process functions.
///
/// Pure functions over f64. Formulas compose as
/// `pell_base` -> `cap_grant` -> `bound`; reordering changes edge cases.
use super::constants::{
    HALF_GRANT, HAMILTON_FULL_LIMIT, MAX_GRANT, PHASE_OUT_END, PHASE_OUT_START, ROUND_LOWER,
    ROUND_UPPER,
};
use crate::poverty::{poverty_threshold, MAX_HOUSEHOLD};

/// Linear phase-out: `MAX_GRANT` at `agi = 1.5T`, zero at `agi = 2.5T`.
///
/// Not clamped; values outside the band extrapolate past both ends.
#[inline]
pub fn pell_base(agi: f64, threshold: f64) -> f64 {
    let start = PHASE_OUT_START * threshold;
    let end = PHASE_OUT_END * threshold;
    MAX_GRANT - (agi - start) * (MAX_GRANT / (end - start))
}

/// Apply the minimum-award rule, then clamp to `[0, cap]`.
///
/// Below `round_upper`, grants under `round_lower` are zeroed and the rest
/// snap up to `round_upper`.
#[inline]
pub fn cap_grant_with(raw: f64, round_lower: f64, round_upper: f64, cap: f64) -> f64 {
    let snapped = if raw < round_upper {
        if raw < round_lower {
            0.0
        } else {
            round_upper
        }
    } else {
        raw
    };
    snapped.clamp(0.0, cap)
}

/// [`cap_grant_with`] using the statutory defaults (288, 577, 5775).
#[inline]
pub fn cap_grant(raw: f64) -> f64 {
    cap_grant_with(raw, ROUND_LOWER, ROUND_UPPER, MAX_GRANT)
}

/// Clamp to `[lower, upper]`. NaN maps to `lower`.
#[inline]
pub fn bound_with(value: f64, upper: f64, lower: f64) -> f64 {
    if value.is_nan() {
        return lower;
    }
    value.clamp(lower, upper)
}

/// [`bound_with`] on `[0, MAX_GRANT]`.
#[inline]
pub fn bound(value: f64) -> f64 {
    bound_with(value, MAX_GRANT, 0.0)
}

/// Household size for the poverty lookup: floored and capped at eight.
#[inline]
pub fn household_size(members: f64) -> f64 {
    members.min(MAX_HOUSEHOLD).floor()
}

/// Full threshold-relative grant for a household of `members`.
#[inline]
pub fn threshold_grant(agi: f64, members: f64) -> f64 {
    let threshold = poverty_threshold(household_size(members));
    bound(cap_grant(pell_base(agi, threshold)))
}

/// Hamilton Project step function for independent students.
///
/// Bands are lower-inclusive: `agi < 2T` is the full award,
/// `2T <= agi < 2.5T` the half award, and `agi >= 2.5T` nothing.
#[inline]
pub fn hamilton_independent(agi: f64, threshold: f64) -> f64 {
    if agi < HAMILTON_FULL_LIMIT * threshold {
        bound(MAX_GRANT)
    } else if agi < PHASE_OUT_END * threshold {
        bound_with(HALF_GRANT, HALF_GRANT, 0.0)
    } else {
        0.0
    }
}
