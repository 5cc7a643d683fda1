//! Comparison operators named by catalog annotations.
//!
//! Every operator is a row in [`OPERATORS`]: its literal annotation name, its
//! variant, and a pure comparator. Numeric comparators fail closed when either
//! side is not a number; equality comparators only accept number or text facts.

use std::fmt;

use insights_core::FactValue;

use crate::threshold::Threshold;

/// A pure comparison of a fact value against a threshold.
pub type Comparator = fn(&FactValue, &Threshold) -> bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    GreaterThan,
    GreaterThanInclusive,
    LessThan,
    LessThanInclusive,
    Equal,
    NotEqual,
}

/// Annotation name → operator → comparator.
pub static OPERATORS: [(&str, Operator, Comparator); 6] = [
    ("greaterThan", Operator::GreaterThan, greater_than),
    ("greaterThanInclusive", Operator::GreaterThanInclusive, greater_than_inclusive),
    ("lessThan", Operator::LessThan, less_than),
    ("lessThanInclusive", Operator::LessThanInclusive, less_than_inclusive),
    ("equal", Operator::Equal, equal),
    ("notEqual", Operator::NotEqual, not_equal),
];

impl Operator {
    /// Case-sensitive lookup by annotation name.
    pub fn parse(name: &str) -> Option<Self> {
        OPERATORS
            .iter()
            .find(|(candidate, _, _)| *candidate == name)
            .map(|(_, op, _)| *op)
    }

    pub fn name(self) -> &'static str {
        self.row().0
    }

    pub fn evaluate(self, fact: &FactValue, threshold: &Threshold) -> bool {
        (self.row().2)(fact, threshold)
    }

    pub fn all() -> impl Iterator<Item = Operator> {
        OPERATORS.iter().map(|(_, op, _)| *op)
    }

    fn row(self) -> &'static (&'static str, Operator, Comparator) {
        let index = match self {
            Operator::GreaterThan => 0,
            Operator::GreaterThanInclusive => 1,
            Operator::LessThan => 2,
            Operator::LessThanInclusive => 3,
            Operator::Equal => 4,
            Operator::NotEqual => 5,
        };
        &OPERATORS[index]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn numeric(fact: &FactValue, threshold: &Threshold, cmp: fn(f64, f64) -> bool) -> bool {
    match (fact.as_number(), threshold.as_number()) {
        (Some(value), Some(limit)) => cmp(value, limit),
        _ => false,
    }
}

fn same_scalar(fact: &FactValue, threshold: &Threshold) -> bool {
    match (fact, threshold) {
        (FactValue::Number(value), Threshold::Number(limit)) => value == limit,
        (FactValue::Text(value), Threshold::Text(limit)) => value == limit,
        _ => false,
    }
}

fn greater_than(fact: &FactValue, threshold: &Threshold) -> bool {
    numeric(fact, threshold, |value, limit| value > limit)
}

fn greater_than_inclusive(fact: &FactValue, threshold: &Threshold) -> bool {
    numeric(fact, threshold, |value, limit| value >= limit)
}

fn less_than(fact: &FactValue, threshold: &Threshold) -> bool {
    numeric(fact, threshold, |value, limit| value < limit)
}

fn less_than_inclusive(fact: &FactValue, threshold: &Threshold) -> bool {
    numeric(fact, threshold, |value, limit| value <= limit)
}

fn equal(fact: &FactValue, threshold: &Threshold) -> bool {
    fact.is_scalar() && same_scalar(fact, threshold)
}

fn not_equal(fact: &FactValue, threshold: &Threshold) -> bool {
    fact.is_scalar() && !same_scalar(fact, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_the_table() {
        for op in Operator::all() {
            assert_eq!(Operator::parse(op.name()), Some(op));
        }
        assert_eq!(Operator::all().count(), 6);
    }

    #[test]
    fn every_variant_owns_its_table_row() {
        for (name, op, _) in OPERATORS.iter() {
            assert_eq!(op.row().1, *op);
            assert_eq!(op.name(), *name);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Operator::parse("lessThan"), Some(Operator::LessThan));
        assert_eq!(Operator::parse("LessThan"), None);
        assert_eq!(Operator::parse("lessthan"), None);
        assert_eq!(Operator::parse(""), None);
    }

    #[test]
    fn boundary_is_inclusive_only_for_inclusive_variants() {
        let ten = FactValue::Number(10.0);
        let limit = Threshold::Number(10.0);
        assert!(!Operator::GreaterThan.evaluate(&ten, &limit));
        assert!(Operator::GreaterThanInclusive.evaluate(&ten, &limit));
        assert!(!Operator::LessThan.evaluate(&ten, &limit));
        assert!(Operator::LessThanInclusive.evaluate(&ten, &limit));
    }

    #[test]
    fn numeric_operators_fail_closed_on_text() {
        let text = FactValue::Text("12".into());
        let limit = Threshold::Number(10.0);
        assert!(!Operator::GreaterThan.evaluate(&text, &limit));
        assert!(!Operator::LessThanInclusive
            .evaluate(&FactValue::Number(1.0), &Threshold::Text("x".into())));
    }

    #[test]
    fn equality_requires_matching_types() {
        let five = FactValue::Number(5.0);
        let text_five = FactValue::Text("5".into());
        assert!(Operator::Equal.evaluate(&five, &Threshold::Number(5.0)));
        assert!(!Operator::Equal.evaluate(&text_five, &Threshold::Number(5.0)));
        assert!(Operator::NotEqual.evaluate(&text_five, &Threshold::Number(5.0)));
        let grade = FactValue::Text("A".into());
        assert!(Operator::Equal.evaluate(&grade, &Threshold::Text("A".into())));
    }

    #[test]
    fn equality_never_matches_lists() {
        let list = FactValue::List(vec![serde_json::json!(1)]);
        assert!(!Operator::Equal.evaluate(&list, &Threshold::Number(1.0)));
        assert!(!Operator::NotEqual.evaluate(&list, &Threshold::Number(1.0)));
    }
}
