//! Typed errors for quantity operations
//!
//! Every rejected operation surfaces as a distinct variant so callers can
//! match on the failure instead of parsing messages.

use thiserror::Error;
use crate::{Category, Operation};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const CATEGORY_MISMATCH: &str = "CATEGORY_MISMATCH";
    pub const UNSUPPORTED_OPERATION: &str = "UNSUPPORTED_OPERATION";
    pub const DIV_ZERO: &str = "DIV_ZERO";
}

pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors raised by unit conversion and quantity arithmetic
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    #[error("Invalid numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Cannot {} quantities of different categories: {left} and {right}", .operation.verb())]
    CategoryMismatch {
        operation: Operation,
        left: Category,
        right: Category,
    },

    #[error("{unit} does not support {operation}")]
    UnsupportedOperation {
        unit: &'static str,
        operation: Operation,
    },

    #[error("Division by zero: divisor quantity has a base value of zero")]
    DivisionByZero,
}

impl MeasureError {
    pub fn category_mismatch(operation: Operation, left: Category, right: Category) -> Self {
        MeasureError::CategoryMismatch { operation, left, right }
    }

    pub fn unsupported(unit: &'static str, operation: Operation) -> Self {
        MeasureError::UnsupportedOperation { unit, operation }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            MeasureError::NonFinite { .. } => codes::INVALID_NUMBER,
            MeasureError::CategoryMismatch { .. } => codes::CATEGORY_MISMATCH,
            MeasureError::UnsupportedOperation { .. } => codes::UNSUPPORTED_OPERATION,
            MeasureError::DivisionByZero => codes::DIV_ZERO,
        }
    }
}
