//! Property tests for conversion, arithmetic and equality

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use measura_units::prelude::*;
use proptest::prelude::*;

fn length_unit() -> impl Strategy<Value = LengthUnit> {
    prop::sample::select(LengthUnit::ALL.to_vec())
}

fn weight_unit() -> impl Strategy<Value = WeightUnit> {
    prop::sample::select(WeightUnit::ALL.to_vec())
}

fn any_unit() -> impl Strategy<Value = AnyUnit> {
    prop::sample::select(AnyUnit::all())
}

/// Two units from the same category, for every category that supports arithmetic
fn arithmetic_unit_pair() -> impl Strategy<Value = (AnyUnit, AnyUnit)> {
    prop::sample::select(vec![Category::Length, Category::Weight, Category::Volume])
        .prop_flat_map(|category| {
            let units = AnyUnit::units_of(category);
            (prop::sample::select(units.clone()), prop::sample::select(units))
        })
}

fn magnitude() -> impl Strategy<Value = f64> {
    -1.0e6_f64..1.0e6_f64
}

fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    t.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn convert_to_own_unit_is_identity(v in magnitude(), unit in any_unit()) {
        let q = Quantity::new(v, unit).unwrap();
        let same = q.convert_to(unit).unwrap();
        prop_assert_eq!(same.value(), v);
        prop_assert_eq!(same.unit(), unit);
    }

    #[test]
    fn add_then_subtract_restores_value(
        v1 in magnitude(),
        u1 in length_unit(),
        v2 in magnitude(),
        u2 in length_unit(),
    ) {
        let q1 = Quantity::new(v1, u1).unwrap();
        let q2 = Quantity::new(v2, u2).unwrap();
        let back = q1.add(&q2, None).unwrap().subtract(&q2, None).unwrap();
        prop_assert_eq!(back.unit(), u1);
        // two roundings to 0.01, each off by at most half a step
        prop_assert!((back.value() - v1).abs() <= 0.01 + 1e-6);
    }

    #[test]
    fn add_then_subtract_restores_value_in_every_category(
        v1 in -1.0e3_f64..1.0e3_f64,
        v2 in -1.0e3_f64..1.0e3_f64,
        (u1, u2) in arithmetic_unit_pair(),
    ) {
        let q1 = Quantity::new(v1, u1).unwrap();
        let q2 = Quantity::new(v2, u2).unwrap();
        let back = q1.add(&q2, None).unwrap().subtract(&q2, None).unwrap();
        prop_assert_eq!(back.unit(), u1);
        prop_assert!((back.value() - v1).abs() <= 0.01 + 1e-5);
    }

    #[test]
    fn equality_is_symmetric(
        v1 in magnitude(),
        u1 in weight_unit(),
        v2 in magnitude(),
        u2 in weight_unit(),
    ) {
        let a = Quantity::new(v1, u1).unwrap();
        let b = Quantity::new(v2, u2).unwrap();
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn whole_feet_survive_conversion(v in -1.0e4_f64..1.0e4_f64) {
        let q = Quantity::new(v.trunc() * 12.0, LengthUnit::Inches).unwrap();
        let converted = q.convert_to(LengthUnit::Feet).unwrap();
        prop_assert_eq!(converted.value(), v.trunc());
        prop_assert_eq!(q, converted);
    }

    #[test]
    fn equal_quantities_hash_alike(v in magnitude(), u1 in any_unit(), u2 in any_unit()) {
        let a = Quantity::new(v, u1).unwrap();
        let b = a.convert_to(u2);
        if let Ok(b) = b {
            if a == b {
                prop_assert_eq!(hash_of(&a), hash_of(&b));
            }
        } else {
            prop_assert_ne!(u1.category(), u2.category());
        }
    }

    #[test]
    fn division_is_not_commutative(
        v1 in 1.0_f64..1.0e6_f64,
        v2 in 1.0_f64..1.0e6_f64,
        u1 in length_unit(),
        u2 in length_unit(),
    ) {
        let a = Quantity::new(v1, u1).unwrap();
        let b = Quantity::new(v2, u2).unwrap();
        let ab = a.divide(&b).unwrap();
        let ba = b.divide(&a).unwrap();
        let (x, y) = (a.base_value(), b.base_value());
        if (x - y).abs() > 1e-6 * x.max(y) {
            prop_assert!((ab - ba).abs() > 1e-9);
        }
        prop_assert!((ab * ba - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cross_category_equality_is_false(v in magnitude(), u1 in any_unit(), u2 in any_unit()) {
        prop_assume!(u1.category() != u2.category());
        let a = Quantity::new(v, u1).unwrap();
        let b = Quantity::new(v, u2).unwrap();
        prop_assert!(a != b);
        prop_assert!(a.subtract(&b, None).is_err());
        prop_assert!(a.divide(&b).is_err());
    }
}
