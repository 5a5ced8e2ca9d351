//! Emission-estimation core for the carbon footprint calculator.
//!
//! The modules mirror the calculator's loader / compute / classify split
//! while providing typed factor records and well-defined errors.

pub mod estimate;
pub mod factors;
pub mod prelude;

pub use factors::{load_factor_table, FactorTable};
pub use prelude::{ActivityInputs, Classification, EmissionEstimate, EstimateError};
