//! pellcalc-core: grant-calculation engine for the Pell Grant estimator.
//!
//! A fixed parameter schema feeds a registry of named calculators. Each
//! calculator is a pure function from the host's current values to a grant
//! in dollars.
//!
//! ```
//! use pellcalc_core::{Engine, EngineConfig, Values};
//!
//! let engine = Engine::new(EngineConfig::default())?;
//! let values = Values::new().with("agi", 30000.0).with("fam", 3.0);
//! assert_eq!(engine.evaluate("twofactorpell", &values)?, 5683.0);
//! # Ok::<(), pellcalc_core::EngineError>(())
//! ```

// Lets `#[derive(Inputs)]` expand to `::pellcalc_core::...` inside this crate.
extern crate self as pellcalc_core;

pub mod config;
pub mod error;
pub mod pell;
pub mod postcard;
pub mod poverty;
pub mod registry;
pub mod schema;
pub mod traits;
pub mod values;

pub use config::{EngineConfig, ThirdFactor};
pub use error::EngineError;
pub use pellcalc_macros::Inputs;
pub use registry::{calculator_id, Calculator, Engine};
pub use schema::{Bound, Dependency, Domain, Parameter, Schema};
pub use values::{Value, Values};
