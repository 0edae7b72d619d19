//! Measura demo
//!
//! Walks through conversion, arithmetic, division and equality for every
//! category and prints each result. Rejected operations are reported and
//! the walk continues.
//!
//! Logging is controlled by `RUST_LOG` (default `info`); set
//! `RUST_LOG=measura_units=trace` to see every conversion.

use measura_units::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print an operation's outcome, or log why it was rejected
fn report<T: std::fmt::Display>(label: &str, result: MeasureResult<T>) {
    match result {
        Ok(value) => println!("{label}: {value}"),
        Err(e) => error!(code = e.code(), "{label}: {e}"),
    }
}

fn demonstrate_equality() -> MeasureResult<()> {
    let foot = Quantity::new(1.0, LengthUnit::Feet)?;
    let inches = Quantity::new(12.0, LengthUnit::Inches)?;
    println!("{foot} and {inches} Equal: {}", foot == inches);

    let kg = Quantity::new(1.0, WeightUnit::Kilogram)?;
    let grams = Quantity::new(1000.0, WeightUnit::Gram)?;
    println!("{kg} and {grams} Equal: {}", kg == grams);

    let litre = Quantity::new(1.0, VolumeUnit::Litre)?;
    let ml = Quantity::new(1000.0, VolumeUnit::Millilitre)?;
    println!("{litre} and {ml} Equal: {}", litre == ml);

    let boiling = Quantity::new(100.0, TemperatureUnit::Celsius)?;
    let fahrenheit = Quantity::new(212.0, TemperatureUnit::Fahrenheit)?;
    println!("{boiling} and {fahrenheit} Equal: {}", boiling == fahrenheit);

    println!("{foot} and {kg} Equal: {}", foot == kg);
    Ok(())
}

fn demonstrate_conversion() -> MeasureResult<()> {
    let foot = Quantity::new(1.0, LengthUnit::Feet)?;
    report("1 FEET in INCHES", foot.convert_to(LengthUnit::Inches));

    let kg = Quantity::new(1.0, WeightUnit::Kilogram)?;
    report("1 KILOGRAM in POUND", kg.convert_to(WeightUnit::Pound));

    let gallon = Quantity::new(1.0, VolumeUnit::Gallon)?;
    report("1 GALLON in LITRE", gallon.convert_to(VolumeUnit::Litre));

    let body = Quantity::new(98.6, TemperatureUnit::Fahrenheit)?;
    report("98.6 FAHRENHEIT in CELSIUS", body.convert_to(TemperatureUnit::Celsius));
    Ok(())
}

fn demonstrate_arithmetic() -> MeasureResult<()> {
    let foot = Quantity::new(1.0, LengthUnit::Feet)?;
    let six_inches = Quantity::new(6.0, LengthUnit::Inches)?;
    let twelve_inches = Quantity::new(12.0, LengthUnit::Inches)?;
    report("1 FEET + 6 INCHES", foot.add(&six_inches, None));
    report(
        "1 FEET + 12 INCHES in YARDS",
        Quantity::sum(&foot, &twelve_inches, LengthUnit::Yards),
    );

    let ten_feet = Quantity::new(10.0, LengthUnit::Feet)?;
    let hundred_twenty = Quantity::new(120.0, LengthUnit::Inches)?;
    report("10 FEET - 120 INCHES", ten_feet.subtract(&hundred_twenty, None));

    let two_feet = Quantity::new(2.0, LengthUnit::Feet)?;
    let inches = Quantity::new(24.0, LengthUnit::Inches)?;
    report("24 INCHES / 2 FEET", inches.divide(&two_feet));

    let litres = Quantity::new(1.5, VolumeUnit::Litre)?;
    report("1.5 LITRE x 4", litres.multiply(4.0));

    let warm = Quantity::new(25.0, TemperatureUnit::Celsius)?;
    let cool = Quantity::new(10.0, TemperatureUnit::Celsius)?;
    report("25 CELSIUS + 10 CELSIUS", warm.add(&cool, None));

    let mixed = foot.into_any();
    let weight = Quantity::new(1.0, WeightUnit::Kilogram)?.into_any();
    report("1 FEET - 1 KILOGRAM", mixed.subtract(&weight, None));
    Ok(())
}

fn main() {
    init_tracing();
    info!(version = env!("CARGO_PKG_VERSION"), "measura demo started");

    let sections: [(&str, fn() -> MeasureResult<()>); 3] = [
        ("equality", demonstrate_equality),
        ("conversion", demonstrate_conversion),
        ("arithmetic", demonstrate_arithmetic),
    ];
    for (name, section) in sections {
        println!("== {name}");
        if let Err(e) = section() {
            error!(section = name, code = e.code(), "demo section failed: {e}");
        }
    }

    let sample = Quantity::new(2.5, VolumeUnit::Gallon).map(Quantity::into_any);
    match sample.map(|q| serde_json::to_string(&q)) {
        Ok(Ok(json)) => println!("== serialized\n{json}"),
        Ok(Err(e)) => error!("serialization failed: {e}"),
        Err(e) => error!(code = e.code(), "invalid sample quantity: {e}"),
    }
}
