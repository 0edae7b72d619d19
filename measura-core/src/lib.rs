//! Measura Core - Fundamental types
//!
//! This crate provides the core types used throughout Measura:
//! - `Category`: The family a measurement unit belongs to
//! - `Operation`: Operations a unit may allow or refuse
//! - `MeasureError`: Typed errors for every rejected operation
//! - `numeric`: The rounding policy applied to produced quantities

mod category;
mod error;
pub mod numeric;

pub use category::{Category, Operation};
pub use error::{MeasureError, MeasureResult, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Category, Operation, MeasureError, MeasureResult};
    pub use crate::numeric::{round_to_precision, ensure_finite};
}
