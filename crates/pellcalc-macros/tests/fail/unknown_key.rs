#![allow(dead_code)]
use pellcalc_macros::Inputs;

#[derive(Inputs)]
pub struct CollegeInputs {
    pub fam: f64,
    #[inputs(name = "col")]
    pub others_in_college: f64,
}

fn main() {}
