//! The unit capability contract

use std::fmt;
use serde::{Serialize, Deserialize};
use measura_core::{Category, MeasureError, MeasureResult, Operation};
use measura_core::numeric::ensure_finite;

/// Affine map from a unit to its category's base unit
/// (`base = value * factor + offset`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Multiplier applied before the offset
    pub factor: f64,
    /// Zero shift for non-proportional scales like Celsius; 0 elsewhere
    pub offset: f64,
}

impl Conversion {
    /// Proportional conversion (no offset)
    pub const fn linear(factor: f64) -> Self {
        Conversion { factor, offset: 0.0 }
    }

    /// Conversion with offset (temperature scales)
    pub const fn affine(factor: f64, offset: f64) -> Self {
        Conversion { factor, offset }
    }

    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor + self.offset
    }

    pub fn from_base(&self, base: f64) -> f64 {
        (base - self.offset) / self.factor
    }
}

/// A measurement unit belonging to exactly one category.
///
/// Implementors supply the category tag, a display name and the conversion
/// to the base unit. Conversions, capability checks and validation are
/// provided on top of those. A category may refuse arithmetic by overriding
/// the `supports_*` flags.
pub trait Unit: Copy + PartialEq + fmt::Debug {
    fn category(&self) -> Category;

    /// Stable display identifier, e.g. `"FEET"`
    fn name(&self) -> &'static str;

    fn conversion(&self) -> Conversion;

    fn supports_addition(&self) -> bool {
        true
    }

    fn supports_subtraction(&self) -> bool {
        true
    }

    fn supports_division(&self) -> bool {
        true
    }

    fn supports_multiplication(&self) -> bool {
        true
    }

    /// Check a capability flag by operation
    fn supports(&self, operation: Operation) -> bool {
        match operation {
            Operation::Conversion => true,
            Operation::Addition => self.supports_addition(),
            Operation::Subtraction => self.supports_subtraction(),
            Operation::Multiplication => self.supports_multiplication(),
            Operation::Division => self.supports_division(),
        }
    }

    /// Fail with `UnsupportedOperation` if the flag for `operation` is off
    fn validate_operation(&self, operation: Operation) -> MeasureResult<()> {
        if self.supports(operation) {
            Ok(())
        } else {
            Err(MeasureError::unsupported(self.name(), operation))
        }
    }

    /// Convert a magnitude in this unit to the category's base unit
    fn to_base(&self, value: f64) -> MeasureResult<f64> {
        let value = ensure_finite(value, "value")?;
        Ok(self.conversion().to_base(value))
    }

    /// Convert a base-unit magnitude back into this unit
    fn from_base(&self, base: f64) -> MeasureResult<f64> {
        let base = ensure_finite(base, "base value")?;
        Ok(self.conversion().from_base(base))
    }

    /// Check if two units belong to the same category
    fn is_compatible<V: Unit>(&self, other: &V) -> bool {
        self.category() == other.category()
    }
}
