//! Error types shared across the catalog UI.
//!
//! ERROR HANDLING
//! ==============
//! None of these reach the user. UI boundaries log them and fall back to
//! defaults (empty history, default config) so a bad value in browser
//! storage never breaks hydration.

use thiserror::Error;

/// Configuration loading or validation failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The config JSON could not be deserialized.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A config value is out of range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Visit-history persistence failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Persisted history exists but is not valid JSON for the envelope.
    #[error("visit history decode failed: {0}")]
    Decode(String),

    /// History could not be serialized for writing.
    #[error("visit history encode failed: {0}")]
    Encode(String),
}

/// Rejected widget lifecycle transition.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The widget instance was unmounted; the update belongs to a stale instance.
    #[error("widget already disposed")]
    Disposed,

    /// Activation runs once per mount.
    #[error("widget already activated")]
    AlreadyActivated,

    /// `finish` called without a preceding `begin` that entered loading.
    #[error("widget is not loading")]
    NotLoading,
}
