//! Unit definitions, one closed enum per category

use std::fmt;
use serde::{Serialize, Deserialize};
use measura_core::Category;
use crate::unit::{Conversion, Unit};

// ============ length ============

/// Length units, relative to feet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LengthUnit {
    Feet,
    Inches,
    Yards,
    Centimeters,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Feet,
        LengthUnit::Inches,
        LengthUnit::Yards,
        LengthUnit::Centimeters,
    ];

    pub const BASE: LengthUnit = LengthUnit::Feet;
}

impl Unit for LengthUnit {
    fn category(&self) -> Category {
        Category::Length
    }

    fn name(&self) -> &'static str {
        match self {
            LengthUnit::Feet => "FEET",
            LengthUnit::Inches => "INCHES",
            LengthUnit::Yards => "YARDS",
            LengthUnit::Centimeters => "CENTIMETERS",
        }
    }

    fn conversion(&self) -> Conversion {
        match self {
            LengthUnit::Feet => Conversion::linear(1.0),
            LengthUnit::Inches => Conversion::linear(1.0 / 12.0),
            LengthUnit::Yards => Conversion::linear(3.0),
            LengthUnit::Centimeters => Conversion::linear(1.0 / 30.48),
        }
    }
}

// ============ weight ============

/// Weight units, relative to kilograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Tonne,
    Pound,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 4] = [
        WeightUnit::Kilogram,
        WeightUnit::Gram,
        WeightUnit::Tonne,
        WeightUnit::Pound,
    ];

    pub const BASE: WeightUnit = WeightUnit::Kilogram;
}

impl Unit for WeightUnit {
    fn category(&self) -> Category {
        Category::Weight
    }

    fn name(&self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "KILOGRAM",
            WeightUnit::Gram => "GRAM",
            WeightUnit::Tonne => "TONNE",
            WeightUnit::Pound => "POUND",
        }
    }

    fn conversion(&self) -> Conversion {
        match self {
            WeightUnit::Kilogram => Conversion::linear(1.0),
            WeightUnit::Gram => Conversion::linear(0.001),
            WeightUnit::Tonne => Conversion::linear(1000.0),
            WeightUnit::Pound => Conversion::linear(0.453592),
        }
    }
}

// ============ volume ============

/// Volume units, relative to litres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeUnit {
    Litre,
    Millilitre,
    Gallon,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 3] = [
        VolumeUnit::Litre,
        VolumeUnit::Millilitre,
        VolumeUnit::Gallon,
    ];

    pub const BASE: VolumeUnit = VolumeUnit::Litre;
}

impl Unit for VolumeUnit {
    fn category(&self) -> Category {
        Category::Volume
    }

    fn name(&self) -> &'static str {
        match self {
            VolumeUnit::Litre => "LITRE",
            VolumeUnit::Millilitre => "MILLILITRE",
            VolumeUnit::Gallon => "GALLON",
        }
    }

    fn conversion(&self) -> Conversion {
        match self {
            VolumeUnit::Litre => Conversion::linear(1.0),
            VolumeUnit::Millilitre => Conversion::linear(0.001),
            // US liquid gallon
            VolumeUnit::Gallon => Conversion::linear(3.78541),
        }
    }
}

// ============ temperature ============

const CELSIUS_ZERO_K: f64 = 273.15;

/// Temperature scales, relative to kelvin.
///
/// Scales are affine, so sums and ratios of readings have no physical
/// meaning: every arithmetic flag is off and only conversion and
/// comparison are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub const BASE: TemperatureUnit = TemperatureUnit::Kelvin;
}

impl Unit for TemperatureUnit {
    fn category(&self) -> Category {
        Category::Temperature
    }

    fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "CELSIUS",
            TemperatureUnit::Fahrenheit => "FAHRENHEIT",
            TemperatureUnit::Kelvin => "KELVIN",
        }
    }

    fn conversion(&self) -> Conversion {
        match self {
            // K = C + 273.15
            TemperatureUnit::Celsius => Conversion::affine(1.0, CELSIUS_ZERO_K),
            // K = (F - 32) * 5/9 + 273.15
            TemperatureUnit::Fahrenheit => {
                Conversion::affine(5.0 / 9.0, CELSIUS_ZERO_K - 32.0 * 5.0 / 9.0)
            }
            TemperatureUnit::Kelvin => Conversion::linear(1.0),
        }
    }

    fn supports_addition(&self) -> bool {
        false
    }

    fn supports_subtraction(&self) -> bool {
        false
    }

    fn supports_division(&self) -> bool {
        false
    }

    fn supports_multiplication(&self) -> bool {
        false
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
