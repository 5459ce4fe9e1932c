/// Registry entries for the Pell on a Postcard calculators.
use std::sync::OnceLock;

use pellcalc_macros::Inputs;

use super::constants::{BASE_BRACKETS, CHILD_CREDIT, MAX_CHILD_CREDIT, MODIFIED_BRACKETS};
use super::table::{validated, BracketTable};
use crate::error::EngineError;
use crate::traits::GrantRule;

static BASE_TABLE: OnceLock<Result<BracketTable, EngineError>> = OnceLock::new();
static MODIFIED_TABLE: OnceLock<Result<BracketTable, EngineError>> = OnceLock::new();

/// The original proposal's table, validated on first use.
pub fn base_table() -> Result<&'static BracketTable, EngineError> {
    validated(&BASE_TABLE, BASE_BRACKETS)
}

/// The modified proposal's table, validated on first use.
pub fn modified_table() -> Result<&'static BracketTable, EngineError> {
    validated(&MODIFIED_TABLE, MODIFIED_BRACKETS)
}

/// `min(children * 250, 1000)`. Fractional and negative counts are floored
/// at zero children.
#[inline]
pub fn child_credit(children: f64) -> f64 {
    (children.max(0.0).floor() * CHILD_CREDIT).min(MAX_CHILD_CREDIT)
}

/// Bracket grant plus child credit.
///
/// With `zero_without_base`, an income above the paying brackets receives
/// nothing, child credit included.
pub fn postcard_grant(
    table: &BracketTable,
    zero_without_base: bool,
    agi: f64,
    children: f64,
) -> f64 {
    let base = table.lookup(agi);
    if zero_without_base && base == 0.0 {
        return 0.0;
    }
    base + child_credit(children)
}

#[derive(Debug, Clone, Copy, Inputs)]
pub struct PostcardInputs {
    pub agi: f64,
    pub chi: f64,
}

/// Original proposal; the child credit is paid even past the last bracket.
pub struct PellOnAPostcard;

impl GrantRule for PellOnAPostcard {
    type Inputs = PostcardInputs;
    const NAME: &'static str = "Pell on a Postcard";
    const DESCRIPTION: Option<&'static str> =
        Some("Award read from an income table, plus $250 per child up to $1,000.");

    fn compute(inputs: &PostcardInputs) -> Result<f64, EngineError> {
        Ok(postcard_grant(base_table()?, false, inputs.agi, inputs.chi))
    }
}

pub struct ModifiedPellOnAPostcard;

impl GrantRule for ModifiedPellOnAPostcard {
    type Inputs = PostcardInputs;
    const NAME: &'static str = "Modified Pell on a Postcard";
    const DESCRIPTION: Option<&'static str> = Some(
        "Longer income table; the child credit applies only while the table pays an award.",
    );

    fn compute(inputs: &PostcardInputs) -> Result<f64, EngineError> {
        Ok(postcard_grant(modified_table()?, true, inputs.agi, inputs.chi))
    }
}
