//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No dictionary given on the command line, in the environment or in the config
    MissingDictionary,
    /// Dictionary file could not be read or parsed
    DictionaryLoad(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingDictionary => write!(f, "No dictionary file given"),
            CliError::DictionaryLoad(path) => write!(f, "Could not load dictionary file \"{path}\""),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_dictionary_load_error_display() {
        let error = CliError::DictionaryLoad("hyph_xx.dic".to_string());
        assert_eq!(
            error.to_string(),
            "Could not load dictionary file \"hyph_xx.dic\""
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid left_min".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid left_min");
    }

    #[test]
    fn test_context_chain_keeps_cli_error() {
        let failure: CliResult<()> = Err(std::io::Error::other("no such file"))
            .context(CliError::DictionaryLoad("a.dic".to_string()));
        let err = failure.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::DictionaryLoad(path)) if path == "a.dic"
        ));
        assert_eq!(
            format!("{err:#}"),
            "Could not load dictionary file \"a.dic\": no such file"
        );
    }

    #[test]
    fn test_missing_dictionary_is_error() {
        let error = CliError::MissingDictionary;
        let _: &dyn std::error::Error = &error;
        assert!(format!("{error:?}").contains("MissingDictionary"));
    }
}
