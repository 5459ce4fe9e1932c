/// Threshold-relative Pell formulas.
///
/// Two-Factor, Three-Factor, and Hamilton Project calculators, all built on
/// a linear phase-out between 1.5x and 2.5x the poverty threshold.
pub mod constants;
pub mod processes;
pub mod rules;
