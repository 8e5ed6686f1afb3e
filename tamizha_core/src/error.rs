//! Error types.
//!
//! Share failures never reach the UI; they exist so the share command can
//! log what went wrong and so tests can tell the paths apart.

use thiserror::Error;

/// Failure of one of the two share paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The native share sheet rejected (user cancelled, permission denied,
    /// unsupported payload).
    #[error("native share rejected: {0}")]
    ShareRejected(String),
    /// Writing the invitation link to the clipboard failed.
    #[error("clipboard write failed: {0}")]
    ClipboardWriteFailed(String),
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or has wrongly typed fields.
    #[error("failed to parse landing config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is outside its allowed range.
    #[error("invalid landing config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_error_messages() {
        let err = ShareError::ShareRejected("AbortError".into());
        assert_eq!(err.to_string(), "native share rejected: AbortError");

        let err = ShareError::ClipboardWriteFailed("NotAllowedError".into());
        assert_eq!(err.to_string(), "clipboard write failed: NotAllowedError");
    }

    #[test]
    fn invalid_config_message_names_field() {
        let err = ConfigError::Invalid {
            field: "scroll.stiffness",
            reason: "must be positive",
        };
        assert_eq!(
            err.to_string(),
            "invalid landing config value `scroll.stiffness`: must be positive"
        );
    }
}
