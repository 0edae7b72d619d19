//! Type-erased unit spanning every category
//!
//! `Quantity<AnyUnit>` can hold lengths, weights, volumes and temperatures
//! side by side; category safety then rests on the runtime category tag.

use std::fmt;
use serde::{Serialize, Deserialize};
use measura_core::Category;
use crate::unit::{Conversion, Unit};
use crate::units::{LengthUnit, TemperatureUnit, VolumeUnit, WeightUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnyUnit {
    Length(LengthUnit),
    Weight(WeightUnit),
    Volume(VolumeUnit),
    Temperature(TemperatureUnit),
}

impl AnyUnit {
    /// All units in a category
    pub fn units_of(category: Category) -> Vec<AnyUnit> {
        match category {
            Category::Length => LengthUnit::ALL.into_iter().map(AnyUnit::from).collect(),
            Category::Weight => WeightUnit::ALL.into_iter().map(AnyUnit::from).collect(),
            Category::Volume => VolumeUnit::ALL.into_iter().map(AnyUnit::from).collect(),
            Category::Temperature => TemperatureUnit::ALL.into_iter().map(AnyUnit::from).collect(),
        }
    }

    /// The base unit every conversion in `category` passes through
    pub fn base_of(category: Category) -> AnyUnit {
        match category {
            Category::Length => LengthUnit::BASE.into(),
            Category::Weight => WeightUnit::BASE.into(),
            Category::Volume => VolumeUnit::BASE.into(),
            Category::Temperature => TemperatureUnit::BASE.into(),
        }
    }

    /// All known units, grouped by category
    pub fn all() -> Vec<AnyUnit> {
        Category::ALL.into_iter().flat_map(AnyUnit::units_of).collect()
    }
}

impl Unit for AnyUnit {
    fn category(&self) -> Category {
        match self {
            AnyUnit::Length(u) => u.category(),
            AnyUnit::Weight(u) => u.category(),
            AnyUnit::Volume(u) => u.category(),
            AnyUnit::Temperature(u) => u.category(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            AnyUnit::Length(u) => u.name(),
            AnyUnit::Weight(u) => u.name(),
            AnyUnit::Volume(u) => u.name(),
            AnyUnit::Temperature(u) => u.name(),
        }
    }

    fn conversion(&self) -> Conversion {
        match self {
            AnyUnit::Length(u) => u.conversion(),
            AnyUnit::Weight(u) => u.conversion(),
            AnyUnit::Volume(u) => u.conversion(),
            AnyUnit::Temperature(u) => u.conversion(),
        }
    }

    fn supports_addition(&self) -> bool {
        match self {
            AnyUnit::Length(u) => u.supports_addition(),
            AnyUnit::Weight(u) => u.supports_addition(),
            AnyUnit::Volume(u) => u.supports_addition(),
            AnyUnit::Temperature(u) => u.supports_addition(),
        }
    }

    fn supports_subtraction(&self) -> bool {
        match self {
            AnyUnit::Length(u) => u.supports_subtraction(),
            AnyUnit::Weight(u) => u.supports_subtraction(),
            AnyUnit::Volume(u) => u.supports_subtraction(),
            AnyUnit::Temperature(u) => u.supports_subtraction(),
        }
    }

    fn supports_division(&self) -> bool {
        match self {
            AnyUnit::Length(u) => u.supports_division(),
            AnyUnit::Weight(u) => u.supports_division(),
            AnyUnit::Volume(u) => u.supports_division(),
            AnyUnit::Temperature(u) => u.supports_division(),
        }
    }

    fn supports_multiplication(&self) -> bool {
        match self {
            AnyUnit::Length(u) => u.supports_multiplication(),
            AnyUnit::Weight(u) => u.supports_multiplication(),
            AnyUnit::Volume(u) => u.supports_multiplication(),
            AnyUnit::Temperature(u) => u.supports_multiplication(),
        }
    }
}

impl From<LengthUnit> for AnyUnit {
    fn from(unit: LengthUnit) -> Self {
        AnyUnit::Length(unit)
    }
}

impl From<WeightUnit> for AnyUnit {
    fn from(unit: WeightUnit) -> Self {
        AnyUnit::Weight(unit)
    }
}

impl From<VolumeUnit> for AnyUnit {
    fn from(unit: VolumeUnit) -> Self {
        AnyUnit::Volume(unit)
    }
}

impl From<TemperatureUnit> for AnyUnit {
    fn from(unit: TemperatureUnit) -> Self {
        AnyUnit::Temperature(unit)
    }
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use measura_core::Operation;

    #[test]
    fn test_units_of() {
        let lengths = AnyUnit::units_of(Category::Length);
        assert_eq!(lengths.len(), 4);
        for unit in lengths {
            assert_eq!(unit.category(), Category::Length);
        }
        assert_eq!(AnyUnit::units_of(Category::Volume).len(), 3);
    }

    #[test]
    fn test_all_covers_every_category() {
        let all = AnyUnit::all();
        assert_eq!(all.len(), 14);
        for category in Category::ALL {
            assert!(all.iter().any(|u| u.category() == category));
        }
    }

    #[test]
    fn test_base_of() {
        for category in Category::ALL {
            let base = AnyUnit::base_of(category);
            assert_eq!(base.category(), category);
            assert_eq!(base.name(), category.base_unit_name());
            assert_eq!(base.conversion(), Conversion::linear(1.0));
        }
    }

    #[test]
    fn test_delegates_flags() {
        let celsius = AnyUnit::from(TemperatureUnit::Celsius);
        assert!(!celsius.supports(Operation::Addition));
        let gram = AnyUnit::from(WeightUnit::Gram);
        assert!(gram.supports(Operation::Division));
    }

    #[test]
    fn test_compatibility() {
        let feet = AnyUnit::from(LengthUnit::Feet);
        assert!(feet.is_compatible(&LengthUnit::Inches));
        assert!(!feet.is_compatible(&WeightUnit::Kilogram));
    }

    #[test]
    fn test_serde_is_tagged_by_category() {
        let json = serde_json::to_string(&AnyUnit::from(VolumeUnit::Gallon)).unwrap();
        assert_eq!(json, r#"{"Volume":"GALLON"}"#);
        let back: AnyUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AnyUnit::Volume(VolumeUnit::Gallon));
    }
}
