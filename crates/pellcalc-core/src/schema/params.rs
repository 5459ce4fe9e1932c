/// Parameter declarations.
///
/// A parameter is either numeric, with a fixed minimum and a maximum that is
/// fixed or derived from another parameter, or an enumerated toggle.
use serde::Serialize;

use super::constants::*;
use crate::error::EngineError;
use crate::values::{FromValue, Value};

/// Upper bound of a numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    Fixed(f64),
    /// `min(value(from) - k, cap)`, where `k` comes from the engine config.
    Derived { from: &'static str, cap: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Domain {
    Numeric { min: f64, max: Bound },
    Toggle { options: &'static [&'static str] },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub id: &'static str,
    pub name: &'static str,
    pub domain: Domain,
    pub start: Value,
    pub step: Option<f64>,
    /// Regex a typed value must match before it is accepted.
    pub pattern: Option<&'static str>,
}

impl Parameter {
    pub fn numeric(
        id: &'static str,
        name: &'static str,
        min: f64,
        max: Bound,
        start: f64,
    ) -> Self {
        Self {
            id,
            name,
            domain: Domain::Numeric { min, max },
            start: Value::Number(start),
            step: None,
            pattern: None,
        }
    }

    pub fn toggle(
        id: &'static str,
        name: &'static str,
        options: &'static [&'static str],
        start: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            domain: Domain::Toggle { options },
            start: Value::from(start),
            step: None,
            pattern: None,
        }
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.domain, Domain::Numeric { .. })
    }
}

/// Student dependency status, the one enumerated parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    Dependent,
    Independent,
}

impl Dependency {
    pub fn label(self) -> &'static str {
        match self {
            Dependency::Dependent => DEPENDENT,
            Dependency::Independent => INDEPENDENT,
        }
    }
}

impl FromValue for Dependency {
    fn from_value(parameter: &str, value: &Value) -> Result<Self, EngineError> {
        match value.as_label() {
            Some(DEPENDENT) => Ok(Dependency::Dependent),
            Some(INDEPENDENT) => Ok(Dependency::Independent),
            Some(other) => Err(EngineError::out_of_domain(
                parameter,
                format!("{other:?} is not one of {DEPENDENCY_OPTIONS:?}"),
            )),
            None => Err(EngineError::out_of_domain(parameter, "expected a label")),
        }
    }
}

/// The authoritative parameter set, in evaluation order.
///
/// Family size comes first: the bounds of `col` and `chi` are resolved
/// against its already-clamped value.
pub fn default_parameters() -> Vec<Parameter> {
    let household_bound = Bound::Derived {
        from: FAMILY_SIZE,
        cap: HOUSEHOLD_COUNT_RANGE.max,
    };
    vec![
        Parameter::numeric(
            FAMILY_SIZE,
            "Family Size",
            FAMILY_SIZE_RANGE.min,
            Bound::Fixed(FAMILY_SIZE_RANGE.max),
            FAMILY_SIZE_START,
        )
        .step(COUNT_STEP)
        .pattern(WHOLE_NUMBER_PATTERN),
        Parameter::numeric(
            AGI,
            "Adjusted Gross Income",
            AGI_RANGE.min,
            Bound::Fixed(AGI_RANGE.max),
            AGI_START,
        )
        .step(AGI_STEP)
        .pattern(WHOLE_NUMBER_PATTERN),
        Parameter::numeric(
            OTHERS_IN_COLLEGE,
            "Number of Other Family in College",
            HOUSEHOLD_COUNT_RANGE.min,
            household_bound,
            OTHERS_IN_COLLEGE_START,
        )
        .step(COUNT_STEP)
        .pattern(WHOLE_NUMBER_PATTERN),
        Parameter::numeric(
            CHILDREN,
            "Number of children (other than student)",
            HOUSEHOLD_COUNT_RANGE.min,
            household_bound,
            CHILDREN_START,
        )
        .step(COUNT_STEP)
        .pattern(WHOLE_NUMBER_PATTERN),
        Parameter::toggle(DEPENDENCY, "Dependency Status", DEPENDENCY_OPTIONS, DEPENDENT),
    ]
}
