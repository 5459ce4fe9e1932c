//! Calculator registry and the engine boundary.
//!
//! The engine is built once from an [`EngineConfig`] and is read-only
//! afterwards. Every evaluation normalizes the host's value record against
//! the schema, runs the selected rule, and applies the rounding convention.
use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{EngineConfig, ThirdFactor};
use crate::error::EngineError;
use crate::pell::rules::{HamiltonProject, ThreeFactorPell, ThreeFactorPellCollege, TwoFactorPell};
use crate::postcard::rules::{
    base_table, modified_table, ModifiedPellOnAPostcard, PellOnAPostcard,
};
use crate::schema::{Parameter, Schema};
use crate::traits::{GrantRule, Inputs};
use crate::values::Values;

type ComputeFn = fn(&Values) -> Result<f64, EngineError>;

/// Calculator id: the name lowercased with every non-letter removed.
pub fn calculator_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Clone, Serialize)]
pub struct Calculator {
    pub id: String,
    pub name: &'static str,
    pub description: Option<&'static str>,
    /// Trusted HTML; the host renders it without escaping.
    pub note_html: Option<&'static str>,
    pub parameters: &'static [&'static str],
    #[serde(skip)]
    compute: ComputeFn,
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

impl Calculator {
    pub fn from_rule<R: GrantRule>() -> Self {
        Self {
            id: calculator_id(R::NAME),
            name: R::NAME,
            description: R::DESCRIPTION,
            note_html: R::NOTE_HTML,
            parameters: <R::Inputs as Inputs>::PARAMETER_IDS,
            compute: R::evaluate,
        }
    }

    /// Run the rule on an already-normalized record.
    pub fn compute(&self, values: &Values) -> Result<f64, EngineError> {
        (self.compute)(values)
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    schema: Schema,
    calculators: Vec<Calculator>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        // A malformed bracket table fails here rather than on first evaluation.
        base_table()?;
        modified_table()?;
        let schema = Schema::standard(config.dependent_bound_offset)?;
        let three_factor = match config.third_factor {
            ThirdFactor::Children => Calculator::from_rule::<ThreeFactorPell>(),
            ThirdFactor::OtherInCollege => Calculator::from_rule::<ThreeFactorPellCollege>(),
        };
        let calculators = vec![
            Calculator::from_rule::<TwoFactorPell>(),
            three_factor,
            Calculator::from_rule::<HamiltonProject>(),
            Calculator::from_rule::<PellOnAPostcard>(),
            Calculator::from_rule::<ModifiedPellOnAPostcard>(),
        ];
        Self::from_parts(config, schema, calculators)
    }

    /// Assemble an engine from a custom schema and calculator list.
    ///
    /// Fails if two calculators share an id or a calculator reads a
    /// parameter the schema does not declare.
    pub fn from_parts(
        config: EngineConfig,
        schema: Schema,
        calculators: Vec<Calculator>,
    ) -> Result<Self, EngineError> {
        for (i, c) in calculators.iter().enumerate() {
            if calculators[..i].iter().any(|other| other.id == c.id) {
                return Err(EngineError::Config(format!("duplicate calculator id {}", c.id)));
            }
            for p in c.parameters {
                schema.parameter(p)?;
            }
        }
        info!(
            calculators = calculators.len(),
            parameters = schema.parameters().len(),
            third_factor = ?config.third_factor,
            "built calculator registry"
        );
        Ok(Self {
            config,
            schema,
            calculators,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn list_parameters(&self) -> &[Parameter] {
        self.schema.parameters()
    }

    pub fn list_calculators(&self) -> &[Calculator] {
        &self.calculators
    }

    pub fn parameter(&self, id: &str) -> Result<&Parameter, EngineError> {
        self.schema.parameter(id)
    }

    pub fn calculator(&self, id: &str) -> Result<&Calculator, EngineError> {
        self.calculators
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| EngineError::UnknownCalculatorId(id.to_string()))
    }

    pub fn bounds_of(&self, id: &str, values: &Values) -> Result<(f64, f64), EngineError> {
        self.schema.bounds_of(id, values)
    }

    pub fn clamp(&self, id: &str, raw: f64, values: &Values) -> Result<f64, EngineError> {
        self.schema.clamp(id, raw, values)
    }

    pub fn accept_input(&self, id: &str, text: &str, prior: f64) -> Result<f64, EngineError> {
        self.schema.accept_input(id, text, prior)
    }

    pub fn default_values(&self) -> Values {
        self.schema.default_values()
    }

    pub fn normalize(&self, values: &Values) -> Result<Values, EngineError> {
        self.schema.normalize(values)
    }

    /// Grant from calculator `id` for the host's current values.
    pub fn evaluate(&self, id: &str, values: &Values) -> Result<f64, EngineError> {
        let calc = self.calculator(id)?;
        let normalized = self.schema.normalize(values)?;
        let raw = calc.compute(&normalized)?;
        let grant = if self.config.round_to_dollars {
            raw.round()
        } else {
            raw
        };
        debug!(calculator = id, raw, grant, "evaluated");
        Ok(grant)
    }

    /// Every calculator's grant for the same values, in registry order.
    pub fn evaluate_all(&self, values: &Values) -> Result<Vec<(&str, f64)>, EngineError> {
        self.calculators
            .iter()
            .map(|c| Ok((c.id.as_str(), self.evaluate(&c.id, values)?)))
            .collect()
    }
}
