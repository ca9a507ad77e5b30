//! Transition condition labels.
//!
//! Conditions are descriptive text: nothing here evaluates them. Parsing
//! only classifies a label so lint can flag names the simulator would
//! never raise.

use std::fmt;

/// Signals the lift simulator raises.
pub const SUPPORTED_SIGNALS: [&str; 5] = [
    "call_received",
    "door_timer_expired",
    "arrived_at_floor",
    "obstacle_detected",
    "tick",
];

/// Classified condition label.
///
/// # Example
///
/// ```rust
/// use liftstate::fsm::Condition;
///
/// assert_eq!(Condition::parse("  Always "), Condition::Always);
/// assert!(Condition::parse("door_timer_expired").is_supported());
/// assert!(!Condition::parse("floor == 3").is_supported());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    /// Empty label, `*` or `always`.
    Always,
    /// Named input signal, lower-cased and trimmed.
    Signal(String),
}

impl Condition {
    pub fn parse(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "" | "*" | "always" => Self::Always,
            _ => Self::Signal(normalized),
        }
    }

    pub fn is_supported(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Signal(name) => SUPPORTED_SIGNALS.contains(&name.as_str()),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("always"),
            Self::Signal(name) => f.write_str(name),
        }
    }
}
