/// Bound resolution, clamping, and input validation over a parameter set.
use regex_lite::Regex;
use tracing::debug;

use super::params::{default_parameters, Bound, Domain, Parameter};
use crate::error::EngineError;
use crate::values::{Value, Values};

#[derive(Debug, Clone)]
pub struct Schema {
    parameters: Vec<Parameter>,
    /// Compiled validation patterns, index-aligned with `parameters`.
    patterns: Vec<Option<Regex>>,
    /// `k` in `min(value(from) - k, cap)`.
    dependent_offset: f64,
}

impl Schema {
    /// Build a schema, checking every declaration and compiling every
    /// validation pattern up front.
    pub fn new(parameters: Vec<Parameter>, dependent_offset: f64) -> Result<Self, EngineError> {
        if !dependent_offset.is_finite() || dependent_offset < 0.0 {
            return Err(EngineError::Config(format!(
                "dependent_bound_offset = {dependent_offset} must be finite and >= 0"
            )));
        }
        check_parameters(&parameters)?;
        let patterns = parameters
            .iter()
            .map(|p| {
                p.pattern
                    .map(|pat| {
                        Regex::new(pat).map_err(|e| EngineError::InvalidPattern {
                            parameter: p.id.to_string(),
                            reason: e.to_string(),
                        })
                    })
                    .transpose()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            parameters,
            patterns,
            dependent_offset,
        })
    }

    /// The authoritative parameter set with offset `k`.
    pub fn standard(dependent_offset: f64) -> Result<Self, EngineError> {
        Self::new(default_parameters(), dependent_offset)
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameter(&self, id: &str) -> Result<&Parameter, EngineError> {
        self.index_of(id).map(|i| &self.parameters[i])
    }

    fn index_of(&self, id: &str) -> Result<usize, EngineError> {
        self.parameters
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| EngineError::UnknownParameterId(id.to_string()))
    }

    /// Current `(min, max)` of a numeric parameter.
    ///
    /// A derived maximum reads its source from `values` (falling back to the
    /// source's start value when absent), clamps the source to its own bounds
    /// first, and never drops below the parameter's minimum. A source that is
    /// present but not a finite number is `OutOfDomain`, as in `normalize`.
    pub fn bounds_of(&self, id: &str, values: &Values) -> Result<(f64, f64), EngineError> {
        let param = self.parameter(id)?;
        let Domain::Numeric { min, max } = param.domain else {
            return Err(EngineError::out_of_domain(id, "toggle has no numeric bounds"));
        };
        let max = match max {
            Bound::Fixed(m) => m,
            Bound::Derived { from, cap } => {
                let source = self.parameter(from)?;
                let raw = values
                    .get(from)
                    .unwrap_or(&source.start)
                    .as_number()
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| EngineError::out_of_domain(from, "expected a finite number"))?;
                let source_value = self.clamp(from, raw, values)?;
                (source_value - self.dependent_offset).min(cap).max(min)
            }
        };
        Ok((min, max))
    }

    /// Clamp `raw` into the current bounds of `id`.
    pub fn clamp(&self, id: &str, raw: f64, values: &Values) -> Result<f64, EngineError> {
        if raw.is_nan() {
            return Err(EngineError::out_of_domain(id, "NaN is not a number"));
        }
        let (min, max) = self.bounds_of(id, values)?;
        let clamped = raw.clamp(min, max);
        if clamped != raw {
            debug!(parameter = id, raw, clamped, "clamped input");
        }
        Ok(clamped)
    }

    /// Validate typed text for a numeric parameter.
    ///
    /// Text that fails the parameter's pattern, or does not parse, is
    /// rejected and `prior` is returned unchanged. Accepted text is returned
    /// unclamped; clamping is a separate step.
    pub fn accept_input(&self, id: &str, text: &str, prior: f64) -> Result<f64, EngineError> {
        let i = self.index_of(id)?;
        if !self.parameters[i].is_numeric() {
            return Err(EngineError::out_of_domain(id, "toggle does not accept typed input"));
        }
        let text = text.trim();
        if let Some(re) = &self.patterns[i] {
            if !re.is_match(text) {
                debug!(parameter = id, text, "rejected input");
                return Ok(prior);
            }
        }
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Ok(prior),
        }
    }

    /// Start value of every parameter.
    pub fn default_values(&self) -> Values {
        self.parameters
            .iter()
            .map(|p| (p.id, p.start.clone()))
            .collect()
    }

    /// Complete, in-domain copy of `values`.
    ///
    /// Missing entries take their start value, numbers are clamped in
    /// schema order (so derived bounds see clamped sources), and toggles are
    /// checked against their options. Ids not in the schema are an error.
    pub fn normalize(&self, values: &Values) -> Result<Values, EngineError> {
        if let Some(unknown) = values.ids().find(|id| self.index_of(id).is_err()) {
            return Err(EngineError::UnknownParameterId(unknown.to_string()));
        }

        let mut out = Values::new();
        for p in &self.parameters {
            let raw = values.get(p.id).unwrap_or(&p.start);
            let value = match &p.domain {
                Domain::Numeric { .. } => {
                    let n = raw.as_number().ok_or_else(|| {
                        EngineError::out_of_domain(p.id, "expected a number, got a label")
                    })?;
                    if !n.is_finite() {
                        return Err(EngineError::out_of_domain(
                            p.id,
                            format!("{n} is not a finite number"),
                        ));
                    }
                    Value::Number(self.clamp(p.id, n, &out)?)
                }
                Domain::Toggle { options } => {
                    let label = raw.as_label().ok_or_else(|| {
                        EngineError::out_of_domain(p.id, "expected a label, got a number")
                    })?;
                    if !options.iter().any(|o| *o == label) {
                        return Err(EngineError::out_of_domain(
                            p.id,
                            format!("{label:?} is not one of {options:?}"),
                        ));
                    }
                    raw.clone()
                }
            };
            out.insert(p.id, value);
        }
        Ok(out)
    }
}

fn invalid(p: &Parameter, reason: impl Into<String>) -> EngineError {
    EngineError::InvalidParameter {
        parameter: p.id.to_string(),
        reason: reason.into(),
    }
}

/// Reject declarations the bound resolution cannot handle.
///
/// A derived bound must read a numeric parameter declared earlier, so
/// resolving it always terminates. Start values are checked against the
/// static range; a derived start is checked against `[min, cap]` since the
/// offset is engine configuration, and `normalize` clamps it further.
fn check_parameters(parameters: &[Parameter]) -> Result<(), EngineError> {
    for (i, p) in parameters.iter().enumerate() {
        if parameters[..i].iter().any(|q| q.id == p.id) {
            return Err(invalid(p, "declared twice"));
        }
        match &p.domain {
            Domain::Numeric { min, max } => {
                let min = *min;
                if !min.is_finite() {
                    return Err(invalid(p, format!("minimum {min} is not finite")));
                }
                let upper = match *max {
                    Bound::Fixed(m) => m,
                    Bound::Derived { from, cap } => {
                        let Some(j) = parameters.iter().position(|q| q.id == from) else {
                            return Err(invalid(p, format!("bound source {from} is not declared")));
                        };
                        if j == i {
                            return Err(invalid(p, "bound cannot depend on itself"));
                        }
                        if j > i {
                            return Err(invalid(
                                p,
                                format!("bound source {from} must be declared first"),
                            ));
                        }
                        if !parameters[j].is_numeric() {
                            return Err(invalid(p, format!("bound source {from} is a toggle")));
                        }
                        cap
                    }
                };
                if !upper.is_finite() || upper < min {
                    return Err(invalid(
                        p,
                        format!("maximum {upper} must be finite and at least {min}"),
                    ));
                }
                let start = p
                    .start
                    .as_number()
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| invalid(p, "start value is not a finite number"))?;
                if start < min || start > upper {
                    return Err(invalid(
                        p,
                        format!("start value {start} is outside [{min}, {upper}]"),
                    ));
                }
            }
            Domain::Toggle { options } => {
                let known = p
                    .start
                    .as_label()
                    .is_some_and(|label| options.iter().any(|o| *o == label));
                if !known {
                    return Err(invalid(p, format!("start value is not one of {options:?}")));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::constants::*;

    fn schema() -> Schema {
        Schema::standard(1.0).unwrap()
    }

    #[test]
    fn fixed_bounds_ignore_values() {
        let s = schema();
        let v = Values::new().with(FAMILY_SIZE, 50.0);
        assert_eq!(s.bounds_of(AGI, &v).unwrap(), (0.0, 1_000_000.0));
        assert_eq!(s.bounds_of(FAMILY_SIZE, &v).unwrap(), (1.0, 100.0));
    }

    #[test]
    fn derived_bound_follows_family_size() {
        let s = schema();
        let v = Values::new().with(FAMILY_SIZE, 4.0);
        assert_eq!(s.bounds_of(CHILDREN, &v).unwrap(), (0.0, 3.0));
        assert_eq!(s.bounds_of(OTHERS_IN_COLLEGE, &v).unwrap(), (0.0, 3.0));
    }

    #[test]
    fn derived_bound_uses_offset() {
        let s = Schema::standard(0.0).unwrap();
        let v = Values::new().with(FAMILY_SIZE, 4.0);
        assert_eq!(s.bounds_of(CHILDREN, &v).unwrap(), (0.0, 4.0));
    }

    #[test]
    fn derived_bound_never_below_min() {
        let s = Schema::standard(5.0).unwrap();
        let v = Values::new().with(FAMILY_SIZE, 1.0);
        assert_eq!(s.bounds_of(CHILDREN, &v).unwrap(), (0.0, 0.0));
    }

    #[test]
    fn derived_bound_caps_at_one_hundred() {
        let s = Schema::standard(0.0).unwrap();
        let v = Values::new().with(FAMILY_SIZE, 100.0);
        assert_eq!(s.bounds_of(CHILDREN, &v).unwrap().1, 100.0);
    }

    #[test]
    fn derived_bound_clamps_source_first() {
        let s = schema();
        let v = Values::new().with(FAMILY_SIZE, 5000.0);
        assert_eq!(s.bounds_of(CHILDREN, &v).unwrap().1, 99.0);
    }

    #[test]
    fn derived_bound_defaults_to_start_of_source() {
        let s = schema();
        assert_eq!(s.bounds_of(CHILDREN, &Values::new()).unwrap().1, 2.0);
    }

    #[test]
    fn derived_bound_rejects_malformed_source() {
        let s = schema();
        for v in [
            Values::new().with(FAMILY_SIZE, "four"),
            Values::new().with(FAMILY_SIZE, f64::NAN),
            Values::new().with(FAMILY_SIZE, f64::INFINITY),
        ] {
            assert!(matches!(
                s.bounds_of(CHILDREN, &v),
                Err(EngineError::OutOfDomain { .. })
            ));
            assert!(s.normalize(&v).is_err());
        }
    }

    #[test]
    fn toggle_has_no_bounds() {
        assert!(schema().bounds_of(DEPENDENCY, &Values::new()).is_err());
    }

    #[test]
    fn unknown_parameter_is_reported() {
        assert_eq!(
            schema().bounds_of("xyz", &Values::new()),
            Err(EngineError::UnknownParameterId("xyz".into()))
        );
    }

    #[test]
    fn clamp_pulls_into_range() {
        let s = schema();
        let v = Values::new();
        assert_eq!(s.clamp(AGI, -5.0, &v).unwrap(), 0.0);
        assert_eq!(s.clamp(AGI, 2e9, &v).unwrap(), 1_000_000.0);
        assert_eq!(s.clamp(FAMILY_SIZE, 0.0, &v).unwrap(), 1.0);
        assert!(s.clamp(AGI, f64::NAN, &v).is_err());
    }

    #[test]
    fn accept_input_holds_prior_on_pattern_failure() {
        let s = schema();
        assert_eq!(s.accept_input(AGI, "42000", 30000.0).unwrap(), 42000.0);
        assert_eq!(s.accept_input(AGI, "42,000", 30000.0).unwrap(), 30000.0);
        assert_eq!(s.accept_input(AGI, "-1", 30000.0).unwrap(), 30000.0);
        assert_eq!(s.accept_input(AGI, "", 30000.0).unwrap(), 30000.0);
        assert_eq!(s.accept_input(FAMILY_SIZE, " 4 ", 3.0).unwrap(), 4.0);
    }

    #[test]
    fn accept_input_rejects_toggles() {
        assert!(schema().accept_input(DEPENDENCY, "1", 0.0).is_err());
    }

    #[test]
    fn invalid_pattern_fails_construction() {
        let params = vec![Parameter::numeric("x", "X", 0.0, Bound::Fixed(1.0), 0.0).pattern("(")];
        assert!(matches!(
            Schema::new(params, 1.0),
            Err(EngineError::InvalidPattern { .. })
        ));
    }

    fn rejected(params: Vec<Parameter>) -> bool {
        matches!(
            Schema::new(params, 1.0),
            Err(EngineError::InvalidParameter { .. })
        )
    }

    fn derived(id: &'static str, from: &'static str) -> Parameter {
        Parameter::numeric(id, id, 0.0, Bound::Derived { from, cap: 10.0 }, 0.0)
    }

    #[test]
    fn construction_rejects_inverted_range() {
        assert!(rejected(vec![Parameter::numeric("x", "X", 5.0, Bound::Fixed(1.0), 5.0)]));
        assert!(rejected(vec![Parameter::numeric(
            "x",
            "X",
            0.0,
            Bound::Fixed(f64::NAN),
            0.0
        )]));
    }

    #[test]
    fn construction_rejects_start_outside_domain() {
        assert!(rejected(vec![Parameter::numeric("x", "X", 0.0, Bound::Fixed(10.0), 50.0)]));
        assert!(rejected(vec![Parameter::numeric("x", "X", 0.0, Bound::Fixed(10.0), -1.0)]));
        assert!(rejected(vec![
            Parameter::numeric("n", "N", 0.0, Bound::Fixed(20.0), 5.0),
            Parameter::numeric("x", "X", 0.0, Bound::Derived { from: "n", cap: 10.0 }, 11.0),
        ]));
        assert!(rejected(vec![Parameter::toggle("t", "T", &["a", "b"], "c")]));
    }

    #[test]
    fn construction_rejects_unusable_bound_source() {
        let source = Parameter::numeric("n", "N", 0.0, Bound::Fixed(20.0), 5.0);
        let toggle = Parameter::toggle("t", "T", &["a", "b"], "a");
        // unknown
        assert!(rejected(vec![derived("x", "missing")]));
        // itself
        assert!(rejected(vec![derived("x", "x")]));
        // declared later
        assert!(rejected(vec![derived("x", "n"), source.clone()]));
        // not numeric
        assert!(rejected(vec![toggle, derived("x", "t")]));
        assert!(Schema::new(vec![source, derived("x", "n")], 1.0).is_ok());
    }

    #[test]
    fn construction_rejects_duplicates_and_bad_offset() {
        let p = Parameter::numeric("x", "X", 0.0, Bound::Fixed(1.0), 0.0);
        assert!(rejected(vec![p.clone(), p.clone()]));
        assert!(matches!(
            Schema::new(vec![p], -1.0),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn clamp_never_panics_on_validated_schema() {
        let s = Schema::new(
            vec![Parameter::numeric("x", "X", 1.0, Bound::Fixed(5.0), 1.0)],
            1.0,
        )
        .unwrap();
        assert_eq!(s.clamp("x", 3.0, &Values::new()).unwrap(), 3.0);
        assert_eq!(s.clamp("x", 30.0, &Values::new()).unwrap(), 5.0);
    }

    #[test]
    fn normalize_fills_defaults() {
        let s = schema();
        let out = s.normalize(&Values::new()).unwrap();
        assert_eq!(out, s.default_values());
    }

    #[test]
    fn normalize_clamps_dependents_against_clamped_family() {
        let s = schema();
        let v = Values::new().with(FAMILY_SIZE, 0.0).with(CHILDREN, 7.0);
        let out = s.normalize(&v).unwrap();
        assert_eq!(out.number(FAMILY_SIZE), Some(1.0));
        assert_eq!(out.number(CHILDREN), Some(0.0));
    }

    #[test]
    fn normalize_rejects_bad_values() {
        let s = schema();
        assert!(s.normalize(&Values::new().with("zzz", 1.0)).is_err());
        assert!(s.normalize(&Values::new().with(DEPENDENCY, "Maybe")).is_err());
        assert!(s.normalize(&Values::new().with(DEPENDENCY, 1.0)).is_err());
        assert!(s.normalize(&Values::new().with(AGI, "rich")).is_err());
        assert!(s.normalize(&Values::new().with(AGI, f64::INFINITY)).is_err());
    }
}
