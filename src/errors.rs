use thiserror::Error;

/// Client-side failure taxonomy. None of these is ever shown to the user
/// verbatim: transport variants are replaced by a fixed fallback reply and
/// clipboard failures only reach the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    // ── Transport errors ─────────────────────────────────────────────────────
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Server error: {status}")]
    Server { status: u16 },

    #[error("Parse error: {message}")]
    Decode { message: String },

    // ── Host platform errors ─────────────────────────────────────────────────
    #[error("Failed to copy: {message}")]
    Clipboard { message: String },
}

impl AppError {
    pub fn network(message: impl Into<String>) -> Self {
        AppError::Network { message: message.into() }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        AppError::Decode { message: message.into() }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        AppError::Clipboard { message: message.into() }
    }

    /// Unreachable host, non-2xx status or an undecodable body.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::Network { .. } | AppError::Server { .. } | AppError::Decode { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_failures_are_not_transport_failures() {
        assert!(AppError::network("refused").is_transport());
        assert!(AppError::Server { status: 502 }.is_transport());
        assert!(AppError::decode("eof").is_transport());
        assert!(!AppError::clipboard("denied").is_transport());
    }

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(AppError::Server { status: 404 }.to_string(), "Server error: 404");
        assert_eq!(
            AppError::clipboard("not allowed").to_string(),
            "Failed to copy: not allowed"
        );
    }
}
