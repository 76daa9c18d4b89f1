use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Configuration is incomplete (e.g. missing API key).
    #[error("configuration error: {0}")]
    Config(String),

    /// The one-shot fetch ended in the error state.
    #[error("could not load income statements: {0}")]
    Fetch(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub(crate) const fn exit_code(&self) -> u8 {
        match self {
            Self::Fetch(_) => 1,
            Self::Config(_) => 2,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Fetch("HTTP 500: boom".into()).exit_code(), 1);
        assert_eq!(CliError::Config("FMP_API_KEY is not set".into()).exit_code(), 2);

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(CliError::from(json).exit_code(), 4);
        assert_eq!(CliError::from(std::io::Error::other("closed")).exit_code(), 10);
    }

    #[test]
    fn test_config_message() {
        let err = CliError::Config("FMP_API_KEY is not set".into());
        assert_eq!(err.to_string(), "configuration error: FMP_API_KEY is not set");
    }
}
