use pellcalc_core::schema::params::Dependency;
use pellcalc_core::traits::Inputs as _;
use pellcalc_core::values::Values;
use pellcalc_macros::Inputs;

#[derive(Debug, Clone, Copy, Inputs)]
pub struct CollegeInputs {
    pub fam: f64,
    #[inputs(id = "col")]
    pub others_in_college: f64,
    #[inputs(id = "dep")]
    pub status: Dependency,
}

fn main() {
    assert_eq!(CollegeInputs::PARAMETER_IDS, &["fam", "col", "dep"]);

    let values = Values::new()
        .with("fam", 4.0)
        .with("col", 1.0)
        .with("dep", "Independent");
    let inputs = CollegeInputs::from_values(&values).unwrap();
    assert_eq!(inputs.others_in_college, 1.0);
    assert_eq!(inputs.status, Dependency::Independent);
}
