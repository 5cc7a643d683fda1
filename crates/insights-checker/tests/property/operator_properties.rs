//! Property tests for operator semantics.

use proptest::prelude::*;

use insights_checker::{Operator, Threshold};
use insights_core::FactValue;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e9f64..1.0e9f64
}

proptest! {
    #[test]
    fn strict_and_inclusive_agree_off_the_boundary(value in finite(), limit in finite()) {
        prop_assume!(value != limit);
        let fact = FactValue::Number(value);
        let threshold = Threshold::Number(limit);
        prop_assert_eq!(
            Operator::GreaterThan.evaluate(&fact, &threshold),
            Operator::GreaterThanInclusive.evaluate(&fact, &threshold)
        );
        prop_assert_eq!(
            Operator::LessThan.evaluate(&fact, &threshold),
            Operator::LessThanInclusive.evaluate(&fact, &threshold)
        );
        prop_assert_ne!(
            Operator::GreaterThan.evaluate(&fact, &threshold),
            Operator::LessThan.evaluate(&fact, &threshold)
        );
    }

    #[test]
    fn boundary_only_passes_inclusive(value in finite()) {
        let fact = FactValue::Number(value);
        let threshold = Threshold::Number(value);
        prop_assert!(!Operator::GreaterThan.evaluate(&fact, &threshold));
        prop_assert!(!Operator::LessThan.evaluate(&fact, &threshold));
        prop_assert!(Operator::GreaterThanInclusive.evaluate(&fact, &threshold));
        prop_assert!(Operator::LessThanInclusive.evaluate(&fact, &threshold));
        prop_assert!(Operator::Equal.evaluate(&fact, &threshold));
    }

    #[test]
    fn equal_and_not_equal_are_complements_on_scalars(
        text in "[a-zA-Z0-9]{0,8}",
        limit in "[a-zA-Z0-9]{1,8}",
    ) {
        let fact = FactValue::Text(text);
        let threshold = Threshold::Text(limit);
        prop_assert_ne!(
            Operator::Equal.evaluate(&fact, &threshold),
            Operator::NotEqual.evaluate(&fact, &threshold)
        );
    }

    #[test]
    fn lists_fail_every_operator(
        items in prop::collection::vec(finite(), 0..5),
        limit in finite(),
    ) {
        let fact = FactValue::List(items.into_iter().map(serde_json::Value::from).collect());
        let threshold = Threshold::Number(limit);
        for op in Operator::all() {
            prop_assert!(!op.evaluate(&fact, &threshold));
        }
    }

    #[test]
    fn text_facts_fail_numeric_operators(text in "[0-9]{1,4}", limit in finite()) {
        let fact = FactValue::Text(text);
        let threshold = Threshold::Number(limit);
        for op in [
            Operator::GreaterThan,
            Operator::GreaterThanInclusive,
            Operator::LessThan,
            Operator::LessThanInclusive,
        ] {
            prop_assert!(!op.evaluate(&fact, &threshold));
        }
    }
}
