/// Income-ceiling -> grant step functions.
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    /// Highest income in this bracket, inclusive [USD].
    pub ceiling: f64,
    pub grant: f64,
}

impl Bracket {
    pub const fn new(ceiling: f64, grant: f64) -> Self {
        Self { ceiling, grant }
    }
}

/// Grant for `agi`: the first bracket whose ceiling is >= `agi`.
///
/// Above every ceiling the last bracket's grant applies. An empty table
/// pays nothing.
fn lookup(brackets: &[Bracket], agi: f64) -> f64 {
    brackets
        .iter()
        .find(|b| agi <= b.ceiling)
        .or_else(|| brackets.last())
        .map_or(0.0, |b| b.grant)
}

/// A validated bracket table.
///
/// Ceilings strictly increase, grants strictly decrease, and no value is
/// negative or non-finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketTable {
    brackets: Vec<Bracket>,
}

impl BracketTable {
    pub fn new(brackets: Vec<Bracket>) -> Result<Self, EngineError> {
        if brackets.is_empty() {
            return Err(EngineError::InvalidBracketTable("table is empty".to_string()));
        }
        for (i, b) in brackets.iter().enumerate() {
            if !b.ceiling.is_finite() || !b.grant.is_finite() || b.ceiling < 0.0 || b.grant < 0.0
            {
                return Err(EngineError::InvalidBracketTable(format!(
                    "bracket {i} ({}, {}) must be finite and non-negative",
                    b.ceiling, b.grant
                )));
            }
        }
        for (i, w) in brackets.windows(2).enumerate() {
            if w[1].ceiling <= w[0].ceiling {
                return Err(EngineError::InvalidBracketTable(format!(
                    "ceiling {} at bracket {} does not exceed {}",
                    w[1].ceiling,
                    i + 1,
                    w[0].ceiling
                )));
            }
            if w[1].grant >= w[0].grant {
                return Err(EngineError::InvalidBracketTable(format!(
                    "grant {} at bracket {} is not below {}",
                    w[1].grant,
                    i + 1,
                    w[0].grant
                )));
            }
        }
        Ok(Self { brackets })
    }

    pub fn from_slice(brackets: &[Bracket]) -> Result<Self, EngineError> {
        Self::new(brackets.to_vec())
    }

    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    pub fn lookup(&self, agi: f64) -> f64 {
        lookup(&self.brackets, agi)
    }
}

/// Validate `brackets` once and cache the outcome in `cell`.
///
/// A malformed table keeps failing with the same error on every call.
pub(crate) fn validated(
    cell: &'static OnceLock<Result<BracketTable, EngineError>>,
    brackets: &[Bracket],
) -> Result<&'static BracketTable, EngineError> {
    cell.get_or_init(|| BracketTable::from_slice(brackets))
        .as_ref()
        .map_err(Clone::clone)
}
