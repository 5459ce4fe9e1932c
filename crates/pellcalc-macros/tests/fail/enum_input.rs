#![allow(dead_code)]
use pellcalc_macros::Inputs;

#[derive(Inputs)]
pub enum Status {
    Dependent,
    Independent,
}

fn main() {}
