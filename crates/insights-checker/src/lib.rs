//! # insights-checker
//!
//! Threshold fact checker. Compares facts previously collected for a catalog
//! entity against thresholds and operators read from catalog annotations,
//! producing one pass/fail result per configured check.
//!
//! Thresholds are governed per system by default: a component's checks read
//! their annotations from the system named in its `spec.system`.

pub mod checker;
pub mod factory;
pub mod operators;
pub mod threshold;

pub use checker::DynamicThresholdFactChecker;
pub use factory::DynamicThresholdFactCheckerFactory;
pub use operators::Operator;
pub use threshold::Threshold;
