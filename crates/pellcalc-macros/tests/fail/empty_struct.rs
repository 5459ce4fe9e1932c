#![allow(dead_code)]
use pellcalc_macros::Inputs;

#[derive(Inputs)]
pub struct NoInputs {}

fn main() {}
