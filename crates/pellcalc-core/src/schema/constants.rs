//! Parameter ids and fixed domain values.
//!
//! Ids are stable keys shared with the host's value record.

// -- Parameter ids --

pub const FAMILY_SIZE: &str = "fam";
pub const AGI: &str = "agi";
pub const OTHERS_IN_COLLEGE: &str = "col";
pub const CHILDREN: &str = "chi";
pub const DEPENDENCY: &str = "dep";

// -- Domains --

/// Fixed numeric range: (min, max).
pub struct Range {
    pub min: f64,
    pub max: f64,
}

pub const FAMILY_SIZE_RANGE: Range = Range {
    min: 1.0,
    max: 100.0,
};

/// Adjusted gross income [USD/year].
pub const AGI_RANGE: Range = Range {
    min: 0.0,
    max: 1_000_000.0,
};

/// Lower bound and hard upper cap for counts bounded by family size.
pub const HOUSEHOLD_COUNT_RANGE: Range = Range {
    min: 0.0,
    max: 100.0,
};

pub const AGI_STEP: f64 = 100.0;
pub const COUNT_STEP: f64 = 1.0;

/// Whole, non-negative numbers typed into a text field.
pub const WHOLE_NUMBER_PATTERN: &str = "^[0-9]+$";

pub const DEPENDENT: &str = "Dependent";
pub const INDEPENDENT: &str = "Independent";
pub const DEPENDENCY_OPTIONS: &[&str] = &[DEPENDENT, INDEPENDENT];

// -- Start values --

pub const FAMILY_SIZE_START: f64 = 3.0;
pub const AGI_START: f64 = 30_000.0;
pub const OTHERS_IN_COLLEGE_START: f64 = 0.0;
pub const CHILDREN_START: f64 = 2.0;
