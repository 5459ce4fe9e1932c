/// Pell on a Postcard tables and credit constants [USD].
use super::table::Bracket;

/// Credit per child other than the student.
pub const CHILD_CREDIT: f64 = 250.0;

/// Ceiling on the total child credit.
pub const MAX_CHILD_CREDIT: f64 = 1000.0;

/// Original proposal. Ceilings are inclusive; incomes above the last
/// ceiling take its grant of zero.
pub const BASE_BRACKETS: &[Bracket] = &[
    Bracket::new(15_000.0, 5775.0),
    Bracket::new(20_000.0, 5000.0),
    Bracket::new(25_000.0, 4000.0),
    Bracket::new(30_000.0, 3000.0),
    Bracket::new(35_000.0, 2000.0),
    Bracket::new(40_000.0, 1000.0),
    Bracket::new(50_000.0, 0.0),
];

/// Modified proposal: wider full-award band and a longer, finer phase-out.
pub const MODIFIED_BRACKETS: &[Bracket] = &[
    Bracket::new(20_000.0, 5775.0),
    Bracket::new(25_000.0, 5000.0),
    Bracket::new(30_000.0, 4250.0),
    Bracket::new(35_000.0, 3500.0),
    Bracket::new(40_000.0, 2750.0),
    Bracket::new(45_000.0, 2000.0),
    Bracket::new(50_000.0, 1250.0),
    Bracket::new(55_000.0, 500.0),
    Bracket::new(60_000.0, 0.0),
];
