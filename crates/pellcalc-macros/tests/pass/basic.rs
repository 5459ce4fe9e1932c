use pellcalc_core::traits::Inputs as _;
use pellcalc_core::values::Values;
use pellcalc_macros::Inputs;

#[derive(Debug, Clone, Copy, Inputs)]
pub struct TestInputs {
    pub agi: f64,
    pub fam: f64,
}

fn main() {
    assert_eq!(TestInputs::PARAMETER_IDS, &["agi", "fam"]);

    let values = Values::new().with("agi", 30000.0).with("fam", 3.0);
    let inputs = TestInputs::from_values(&values).unwrap();
    assert_eq!(inputs.agi, 30000.0);
    assert_eq!(inputs.fam, 3.0);

    assert!(TestInputs::from_values(&Values::new().with("agi", 1.0)).is_err());
}
