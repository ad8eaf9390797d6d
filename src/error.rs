use thiserror::Error;

/// Failures the engine and its collaborators can report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid profile: {}", errors.join("; "))]
    InvalidProfile { errors: Vec<String> },

    /// Katch-McArdle claimed for a profile without a body fat measurement.
    #[error("method {method} cannot be reproduced without body fat data")]
    InvalidMethodForProfile { method: String },

    #[error("unknown BMR method: {method}")]
    UnknownMethod { method: String },

    #[error("{provider} failed: {message}")]
    Provider { provider: String, message: String },

    #[error("{provider} does not provide {capability}")]
    Unavailable {
        provider: String,
        capability: &'static str,
    },
}

impl EngineError {
    /// Error code used in the JSON error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidProfile { .. } => "invalid_profile",
            Self::InvalidMethodForProfile { .. } | Self::UnknownMethod { .. } => "invalid_method",
            Self::Provider { .. } | Self::Unavailable { .. } => "provider_error",
        }
    }
}
