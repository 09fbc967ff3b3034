//! Error types for duet-core

use thiserror::Error;

/// Core error type
#[derive(Debug, Error)]
pub enum Error {
    /// The agent configuration source is missing, unreadable or malformed
    #[error("configuration unavailable: {0}")]
    ConfigurationUnavailable(String),

    /// A required agent (or cross-agent mode) is disabled
    #[error("{message}")]
    AgentUnavailable {
        /// Disabled component (`cross_agent`, `jules_agent`, `gemini_agent`)
        component: String,
        /// Human-readable detail, naming the disabled component(s)
        message: String,
    },

    /// Any other failure during request handling or phase execution
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Build an `AgentUnavailable` error
    pub fn agent_unavailable(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AgentUnavailable {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigurationUnavailable(_) => "CONFIGURATION_UNAVAILABLE",
            Self::AgentUnavailable { .. } => "AGENT_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_unavailable_displays_message_only() {
        let err = Error::agent_unavailable("gemini_agent", "Gemini agent not enabled");
        assert_eq!(err.to_string(), "Gemini agent not enabled");
        assert_eq!(err.code(), "AGENT_UNAVAILABLE");
    }

    #[test]
    fn test_configuration_error_display() {
        let err = Error::ConfigurationUnavailable("missing file".to_string());
        assert!(err.to_string().contains("missing file"));
        assert_eq!(err.code(), "CONFIGURATION_UNAVAILABLE");
    }
}
