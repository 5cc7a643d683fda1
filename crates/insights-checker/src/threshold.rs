//! Threshold values read from catalog annotations.

use std::fmt;

/// A comparison threshold. Annotations that parse as a finite number compare
/// numerically; anything else is kept as text for equality checks.
#[derive(Debug, Clone, PartialEq)]
pub enum Threshold {
    Number(f64),
    Text(String),
}

impl Threshold {
    /// `None` for an absent or blank annotation.
    pub fn from_annotation(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Some(Threshold::Number(n)),
            _ => Some(Threshold::Text(raw.to_string())),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Threshold::Number(n) => Some(*n),
            Threshold::Text(_) => None,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Number(n) => write!(f, "{n}"),
            Threshold::Text(s) => write!(f, "{s:?}"),
        }
    }
}
