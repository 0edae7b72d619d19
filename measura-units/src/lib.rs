//! Measura Units - Category-safe quantities
//!
//! Provides values paired with a measurement unit, with conversion,
//! comparison and arithmetic routed through each category's base unit.
//!
//! Categories:
//! - Length (FEET, INCHES, YARDS, CENTIMETERS)
//! - Weight (KILOGRAM, GRAM, TONNE, POUND)
//! - Volume (LITRE, MILLILITRE, GALLON)
//! - Temperature (CELSIUS, FAHRENHEIT, KELVIN), conversion and comparison only

mod unit;
mod units;
mod any;
mod quantity;

pub use measura_core::{Category, Operation, MeasureError, MeasureResult};
pub use unit::{Unit, Conversion};
pub use units::{LengthUnit, WeightUnit, VolumeUnit, TemperatureUnit};
pub use any::AnyUnit;
pub use quantity::Quantity;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        AnyUnit, Category, LengthUnit, MeasureError, MeasureResult, Operation, Quantity,
        TemperatureUnit, Unit, VolumeUnit, WeightUnit,
    };
}
