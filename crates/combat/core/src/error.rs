//! Error classification shared by the combat-core error types.
//!
//! Domain errors (`ActionError`, `InventoryError`) live beside the operations
//! they guard. Nothing in a battle is fatal: every rejection becomes a log
//! entry and the player picks again.

/// How a caller should treat an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The same request may succeed later, or another choice will.
    ///
    /// Examples: not enough MP, a full bag.
    Recoverable,

    /// The request names something that does not exist or does not apply.
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common interface of combat-core errors, used for structured logging.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier of the variant, e.g. `ACTION_FLEE_REFUSED_BOSS`.
    fn error_code(&self) -> &'static str;
}
