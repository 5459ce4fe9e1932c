/// Registry entries for the threshold-relative calculators.
use pellcalc_macros::Inputs;

use super::processes::{hamilton_independent, household_size, threshold_grant};
use crate::poverty::poverty_threshold;
use crate::schema::params::Dependency;
use crate::error::EngineError;
use crate::traits::GrantRule;

#[derive(Debug, Clone, Copy, Inputs)]
pub struct TwoFactorInputs {
    pub agi: f64,
    pub fam: f64,
}

/// Family size alone sets the poverty threshold.
pub struct TwoFactorPell;

impl GrantRule for TwoFactorPell {
    type Inputs = TwoFactorInputs;
    const NAME: &'static str = "Two-Factor Pell";
    const DESCRIPTION: Option<&'static str> =
        Some("Income and family size against the federal poverty guideline.");

    fn compute(inputs: &TwoFactorInputs) -> Result<f64, EngineError> {
        Ok(threshold_grant(inputs.agi, inputs.fam))
    }
}

#[derive(Debug, Clone, Copy, Inputs)]
pub struct ThreeFactorChildrenInputs {
    pub agi: f64,
    pub fam: f64,
    pub chi: f64,
}

/// Children other than the student extend the household.
pub struct ThreeFactorPell;

impl GrantRule for ThreeFactorPell {
    type Inputs = ThreeFactorChildrenInputs;
    const NAME: &'static str = "Three-Factor Pell";
    const DESCRIPTION: Option<&'static str> =
        Some("Income, family size, and number of children.");

    fn compute(inputs: &ThreeFactorChildrenInputs) -> Result<f64, EngineError> {
        Ok(threshold_grant(inputs.agi, inputs.fam + inputs.chi))
    }
}

#[derive(Debug, Clone, Copy, Inputs)]
pub struct ThreeFactorCollegeInputs {
    pub agi: f64,
    pub fam: f64,
    pub col: f64,
}

/// Three-Factor Pell where other family in college extend the household.
pub struct ThreeFactorPellCollege;

impl GrantRule for ThreeFactorPellCollege {
    type Inputs = ThreeFactorCollegeInputs;
    const NAME: &'static str = "Three-Factor Pell";
    const DESCRIPTION: Option<&'static str> =
        Some("Income, family size, and other family members in college.");

    fn compute(inputs: &ThreeFactorCollegeInputs) -> Result<f64, EngineError> {
        Ok(threshold_grant(inputs.agi, inputs.fam + inputs.col))
    }
}

#[derive(Debug, Clone, Copy, Inputs)]
pub struct HamiltonInputs {
    pub agi: f64,
    pub fam: f64,
    pub dep: Dependency,
}

pub struct HamiltonProject;

impl GrantRule for HamiltonProject {
    type Inputs = HamiltonInputs;
    const NAME: &'static str = "Hamilton Project";
    const DESCRIPTION: Option<&'static str> = Some(
        "Dependent students follow the two-factor phase-out; \
         independent students get a full, half, or no award.",
    );
    const NOTE_HTML: Option<&'static str> = Some(
        "Based on the <a href=\"https://www.hamiltonproject.org/\" target=\"_blank\">\
         Hamilton Project</a> simplification proposal.",
    );

    fn compute(inputs: &HamiltonInputs) -> Result<f64, EngineError> {
        let grant = match inputs.dep {
            Dependency::Dependent => threshold_grant(inputs.agi, inputs.fam),
            Dependency::Independent => {
                let threshold = poverty_threshold(household_size(inputs.fam));
                hamilton_independent(inputs.agi, threshold)
            }
        };
        Ok(grant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pell::constants::{HALF_GRANT, MAX_GRANT};
    use crate::traits::Inputs;
    use crate::values::Values;
    use approx::assert_relative_eq;

    #[test]
    fn two_factor_reads_agi_and_family() {
        assert_eq!(TwoFactorInputs::PARAMETER_IDS, &["agi", "fam"]);
        let g = TwoFactorPell::compute(&TwoFactorInputs {
            agi: 30_000.0,
            fam: 3.0,
        })
        .unwrap();
        assert_relative_eq!(g, 5683.0786, epsilon = 1e-3);
    }

    #[test]
    fn two_factor_caps_household_at_eight() {
        let big = TwoFactorPell::compute(&TwoFactorInputs {
            agi: 70_000.0,
            fam: 12.0,
        })
        .unwrap();
        let eight = TwoFactorPell::compute(&TwoFactorInputs {
            agi: 70_000.0,
            fam: 8.0,
        })
        .unwrap();
        assert_eq!(big, eight);
    }

    #[test]
    fn three_factor_children_grows_household() {
        let two = TwoFactorPell::compute(&TwoFactorInputs {
            agi: 40_000.0,
            fam: 3.0,
        })
        .unwrap();
        let three = ThreeFactorPell::compute(&ThreeFactorChildrenInputs {
            agi: 40_000.0,
            fam: 3.0,
            chi: 2.0,
        })
        .unwrap();
        assert!(three > two);
        // household of 5: T = 27910, full award below 41865
        assert_eq!(three, MAX_GRANT);
    }

    #[test]
    fn three_factor_college_variant_reads_col() {
        assert_eq!(ThreeFactorCollegeInputs::PARAMETER_IDS, &["agi", "fam", "col"]);
        let g = ThreeFactorPellCollege::compute(&ThreeFactorCollegeInputs {
            agi: 40_000.0,
            fam: 3.0,
            col: 2.0,
        })
        .unwrap();
        assert_eq!(g, MAX_GRANT);
    }

    #[test]
    fn hamilton_dependent_matches_two_factor() {
        let h = HamiltonProject::compute(&HamiltonInputs {
            agi: 35_000.0,
            fam: 3.0,
            dep: Dependency::Dependent,
        })
        .unwrap();
        let t = TwoFactorPell::compute(&TwoFactorInputs {
            agi: 35_000.0,
            fam: 3.0,
        })
        .unwrap();
        assert_eq!(h, t);
    }

    #[test]
    fn hamilton_independent_at_double_threshold_gets_half() {
        let h = HamiltonProject::compute(&HamiltonInputs {
            agi: 2.0 * 19_790.0,
            fam: 3.0,
            dep: Dependency::Independent,
        })
        .unwrap();
        assert_eq!(h, HALF_GRANT);
    }

    #[test]
    fn hamilton_evaluates_from_values() {
        let v = Values::new()
            .with("agi", 10_000.0)
            .with("fam", 3.0)
            .with("dep", "Independent");
        assert_eq!(HamiltonProject::evaluate(&v).unwrap(), MAX_GRANT);
    }
}
