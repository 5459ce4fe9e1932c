/// Parameter schema: the inputs every calculator draws from.
///
/// Declares each parameter's domain, default, step, and validation pattern,
/// and resolves bounds that depend on other parameters' current values.
pub mod bounds;
pub mod constants;
pub mod params;

pub use bounds::Schema;
pub use params::{Bound, Dependency, Domain, Parameter};
