//! Quantity type - a value with an associated unit

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use serde::{Serialize, Deserialize};
use tracing::{debug, trace};
use measura_core::{Category, MeasureError, MeasureResult, Operation};
use measura_core::numeric::{ensure_finite, round_to_precision};
use crate::any::AnyUnit;
use crate::unit::Unit;

/// A measured quantity: a finite magnitude with its unit.
///
/// Quantities are immutable; every operation returns a new value. Results
/// of conversion and arithmetic are rounded to two decimal places, and
/// equality compares the rounded base-unit magnitudes, so `1 FEET` equals
/// `12 INCHES`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(
    try_from = "RawQuantity<U>",
    bound(deserialize = "U: Unit + Deserialize<'de>")
)]
pub struct Quantity<U> {
    value: f64,
    unit: U,
}

/// Unvalidated wire form, checked through `Quantity::new` on the way in
#[derive(Deserialize)]
struct RawQuantity<U> {
    value: f64,
    unit: U,
}

impl<U: Unit> TryFrom<RawQuantity<U>> for Quantity<U> {
    type Error = MeasureError;

    fn try_from(raw: RawQuantity<U>) -> Result<Self, Self::Error> {
        Quantity::new(raw.value, raw.unit)
    }
}

impl<U: Unit> Quantity<U> {
    /// Create a new quantity, rejecting NaN and infinite values
    pub fn new(value: f64, unit: U) -> MeasureResult<Self> {
        let value = ensure_finite(value, "value")?;
        Ok(Quantity { value, unit })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn category(&self) -> Category {
        self.unit.category()
    }

    /// Unrounded magnitude in the category's base unit
    pub fn base_value(&self) -> f64 {
        self.unit.conversion().to_base(self.value)
    }

    /// Check if two quantities belong to the same category
    pub fn is_compatible<V: Unit>(&self, other: &Quantity<V>) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// Convert to another unit of the same category.
    ///
    /// Converting to the current unit returns the quantity untouched.
    pub fn convert_to(&self, target: U) -> MeasureResult<Quantity<U>> {
        if target == self.unit {
            return Ok(*self);
        }
        self.ensure_same_category(&target, Operation::Conversion)?;

        let base = self.unit.to_base(self.value)?;
        let converted = round_to_precision(target.from_base(base)?);
        trace!(
            from = self.unit.name(),
            to = target.name(),
            value = self.value,
            converted,
            "converted quantity"
        );
        Quantity::new(converted, target)
    }

    /// Add `other`, expressing the result in `target` (defaults to this unit)
    pub fn add(&self, other: &Quantity<U>, target: Option<U>) -> MeasureResult<Quantity<U>> {
        let target = target.unwrap_or(self.unit);
        Self::combine(self, other, target, Operation::Addition, |a, b| a + b)
    }

    /// Subtract `other`, expressing the result in `target` (defaults to this unit)
    pub fn subtract(&self, other: &Quantity<U>, target: Option<U>) -> MeasureResult<Quantity<U>> {
        let target = target.unwrap_or(self.unit);
        Self::combine(self, other, target, Operation::Subtraction, |a, b| a - b)
    }

    /// Add two independent quantities, expressing the result in `target`
    pub fn sum(q1: &Quantity<U>, q2: &Quantity<U>, target: U) -> MeasureResult<Quantity<U>> {
        Self::combine(q1, q2, target, Operation::Addition, |a, b| a + b)
    }

    /// Dimensionless ratio of the two base-unit magnitudes, unrounded
    pub fn divide(&self, other: &Quantity<U>) -> MeasureResult<f64> {
        self.ensure_same_category(&other.unit, Operation::Division)?;
        self.ensure_supported(Operation::Division)?;

        let dividend = self.unit.to_base(self.value)?;
        let divisor = other.unit.to_base(other.value)?;
        if divisor == 0.0 {
            debug!(divisor = other.unit.name(), "rejected division by zero quantity");
            return Err(MeasureError::DivisionByZero);
        }
        Ok(dividend / divisor)
    }

    /// Scale the magnitude by a dimensionless factor, keeping the unit
    pub fn multiply(&self, factor: f64) -> MeasureResult<Quantity<U>> {
        let factor = ensure_finite(factor, "factor")?;
        self.ensure_supported(Operation::Multiplication)?;
        Quantity::new(round_to_precision(self.value * factor), self.unit)
    }

    fn combine(
        lhs: &Quantity<U>,
        rhs: &Quantity<U>,
        target: U,
        operation: Operation,
        op: fn(f64, f64) -> f64,
    ) -> MeasureResult<Quantity<U>> {
        lhs.ensure_same_category(&rhs.unit, operation)?;
        lhs.ensure_same_category(&target, operation)?;
        lhs.ensure_supported(operation)?;

        let base1 = lhs.unit.to_base(lhs.value)?;
        let base2 = rhs.unit.to_base(rhs.value)?;
        let result = round_to_precision(target.from_base(op(base1, base2))?);
        trace!(%operation, target = target.name(), result, "combined quantities");
        Quantity::new(result, target)
    }

    fn ensure_same_category<V: Unit>(&self, other: &V, operation: Operation) -> MeasureResult<()> {
        if self.unit.is_compatible(other) {
            return Ok(());
        }
        debug!(
            %operation,
            left = %self.unit.category(),
            right = %other.category(),
            "rejected cross-category operation"
        );
        Err(MeasureError::category_mismatch(operation, self.unit.category(), other.category()))
    }

    fn ensure_supported(&self, operation: Operation) -> MeasureResult<()> {
        self.unit.validate_operation(operation).inspect_err(|_| {
            debug!(unit = self.unit.name(), %operation, "rejected unsupported operation");
        })
    }

    /// Rounded base-unit magnitude used for equality, ordering and hashing
    fn rounded_base(&self) -> f64 {
        round_to_precision(self.base_value())
    }
}

impl<U: Unit + Into<AnyUnit>> Quantity<U> {
    /// Erase the category from the type, keeping it as a runtime tag
    pub fn into_any(self) -> Quantity<AnyUnit> {
        Quantity {
            value: self.value,
            unit: self.unit.into(),
        }
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // round first so ties go up, as everywhere else
        write!(f, "Quantity({:.2}, {})", round_to_precision(self.value), self.unit.name())
    }
}

impl<U: Unit, V: Unit> PartialEq<Quantity<V>> for Quantity<U> {
    fn eq(&self, other: &Quantity<V>) -> bool {
        // Compare rounded base values; different categories are never equal
        self.is_compatible(other) && self.rounded_base() == other.rounded_base()
    }
}

impl<U: Unit> Eq for Quantity<U> {}

impl<U: Unit> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit.category().hash(state);
        self.rounded_base().to_bits().hash(state);
    }
}

impl<U: Unit, V: Unit> PartialOrd<Quantity<V>> for Quantity<U> {
    fn partial_cmp(&self, other: &Quantity<V>) -> Option<Ordering> {
        if !self.is_compatible(other) {
            return None;
        }
        self.rounded_base().partial_cmp(&other.rounded_base())
    }
}
