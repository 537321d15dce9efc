//! Common error infrastructure for tactics-core.
//!
//! Domain errors (e.g. [`GridError`](crate::state::GridError)) live next to the
//! data they guard and implement [`CoreError`] so callers can classify them
//! uniformly.
//!
//! Routine "can't get there" outcomes (no path, no line of sight, nothing
//! reachable within budget) are never errors: they are empty or `false`
//! results returned by the pathfinder.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the request was refused by current map state and may
///   succeed later or with another target
/// - **Validation**: the caller passed input it never validated
/// - **Internal**: unexpected state inconsistency
/// - **Fatal**: process-level setup was violated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: destination occupied, terrain impassable.
    Recoverable,

    /// Examples: coordinates outside the map, unknown map id.
    Validation,

    /// Examples: occupancy bookkeeping out of sync.
    Internal,

    /// Examples: terrain catalog installed twice.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Error taxonomy shared by grid operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A coordinate pair fell outside the map. Never silently clamped.
    OutOfBounds,
    /// A missing or mismatched map/mover reference, or malformed construction input.
    InvalidOperand,
    /// The cell refused a mutation (occupied, impassable).
    Rejected,
}

/// Common trait for all tactics-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the taxonomy bucket of this error.
    fn kind(&self) -> ErrorKind;

    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
