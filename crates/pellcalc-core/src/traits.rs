use crate::error::EngineError;
use crate::values::Values;

/// Typed input record for a calculator rule.
///
/// Usually derived with `#[derive(Inputs)]`: field names are parameter ids,
/// in the order the calculator lists them.
pub trait Inputs: Sized {
    /// Parameter ids read by this record, in declaration order.
    const PARAMETER_IDS: &'static [&'static str];

    /// Extract the record from a normalized value map.
    fn from_values(values: &Values) -> Result<Self, EngineError>;
}

/// Core trait for grant calculators.
///
/// A rule is a pure function of its typed inputs. Clamping and rounding
/// happen outside the rule, in the registry.
pub trait GrantRule {
    type Inputs: Inputs;

    /// Display name; the calculator id is derived from it.
    const NAME: &'static str;

    /// Short plain-text description shown under the calculator.
    const DESCRIPTION: Option<&'static str> = None;

    /// Trusted HTML note (links to the proposal, caveats).
    const NOTE_HTML: Option<&'static str> = None;

    /// Compute the unrounded grant.
    ///
    /// Only table-backed rules can fail, and only when their table is
    /// malformed.
    fn compute(inputs: &Self::Inputs) -> Result<f64, EngineError>;

    /// Extract inputs and compute.
    fn evaluate(values: &Values) -> Result<f64, EngineError> {
        let inputs = Self::Inputs::from_values(values)?;
        Self::compute(&inputs)
    }
}
