#![allow(dead_code)]
use pellcalc_macros::Inputs;

#[derive(Inputs)]
pub struct Household(f64, f64);

fn main() {}
