//! Measurement categories and the operations units can support
//!
//! A category groups units that convert into each other through a shared
//! base unit. Two quantities can only be combined when their categories match.

use std::fmt;
use serde::{Serialize, Deserialize};

/// A family of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Base unit: feet
    Length,
    /// Base unit: kilogram
    Weight,
    /// Base unit: litre
    Volume,
    /// Base unit: kelvin (affine scales)
    Temperature,
}

impl Category {
    /// All known categories
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Volume,
        Category::Temperature,
    ];

    /// Lowercase name of the category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Volume => "volume",
            Category::Temperature => "temperature",
        }
    }

    /// Display name of the category's base unit
    pub fn base_unit_name(&self) -> &'static str {
        match self {
            Category::Length => "FEET",
            Category::Weight => "KILOGRAM",
            Category::Volume => "LITRE",
            Category::Temperature => "KELVIN",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Operations a quantity can be asked to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Conversion,
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Noun form, used in "does not support ..." messages
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Conversion => "conversion",
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
        }
    }

    /// Verb form, used in "cannot ... quantities" messages
    pub fn verb(&self) -> &'static str {
        match self {
            Operation::Conversion => "convert",
            Operation::Addition => "add",
            Operation::Subtraction => "subtract",
            Operation::Multiplication => "multiply",
            Operation::Division => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
