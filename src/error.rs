//! Error types
//!
//! Gameplay itself never fails; errors only come from building a session
//! (bad configuration) or driving its lifecycle out of order.

use core::fmt;

use crate::sim::GamePhase;

#[derive(Clone, Debug, PartialEq)]
pub enum GameError {
    /// A settings or tuning value would produce an unplayable field
    InvalidConfig { field: &'static str, reason: String },
    /// `start()` called on a session that already left `NotStarted`
    AlreadyStarted { phase: GamePhase },
    /// Settings file could not be read or parsed
    Settings(String),
}

impl GameError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid configuration for `{field}`: {reason}")
            }
            Self::AlreadyStarted { phase } => {
                write!(f, "session already started (phase: {phase:?})")
            }
            Self::Settings(msg) => write!(f, "settings error: {msg}"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = GameError::invalid("field_height", "too small");
        assert_eq!(
            err.to_string(),
            "invalid configuration for `field_height`: too small"
        );
    }

    #[test]
    fn test_display_already_started() {
        let err = GameError::AlreadyStarted {
            phase: GamePhase::GameOver,
        };
        assert!(err.to_string().contains("GameOver"));
    }
}
