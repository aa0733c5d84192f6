use std::path::PathBuf;

/// Fatal errors raised while retrieving or parsing the grammar document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_saphyr::Error),
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("grammar file not found: {0}")]
    NotFound(PathBuf),
    #[error("invalid reference: {0}")]
    InvalidReference(String),
    #[error("git show failed for '{reference}': {message}")]
    GitShow { reference: String, message: String },
}

/// Structural problems in a grammar document.
///
/// These are reported back to the commenter instead of aborting the run, so
/// the rendered message is user facing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Configuration error: missing `commands` array")]
    MissingCommands,
    #[error("Configuration error: a command is missing the `name` property")]
    MissingName,
    #[error(
        "Configuration error: `{}` must contain either a `result` or `commands` property, but not both",
        .path.join(" ")
    )]
    ResultAndCommands { path: Vec<String> },
    #[error(
        "Configuration error: `{}` must contain either a `result` or `commands` property",
        .path.join(" ")
    )]
    NoResultOrCommands { path: Vec<String> },
    #[error(
        "Configuration error: `{}` has a `commands` property that is not a list",
        .path.join(" ")
    )]
    CommandsNotList { path: Vec<String> },
    #[error("Configuration error: {0}")]
    Schema(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // === ConfigError ===

    #[test]
    fn config_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert_eq!(config_err.to_string(), "io error: file not found");
    }

    #[test]
    fn config_error_from_yaml_error() {
        let result: Result<String, serde_saphyr::Error> = serde_saphyr::from_str("[invalid");
        let config_err: ConfigError = result.unwrap_err().into();
        assert!(config_err.to_string().starts_with("yaml parse error:"));
        assert!(std::error::Error::source(&config_err).is_some());
    }

    #[test]
    fn config_error_from_fetch_error() {
        let fetch_err = FetchError::InvalidReference("-bad".to_string());
        let config_err: ConfigError = fetch_err.into();
        assert_eq!(
            config_err.to_string(),
            "fetch error: invalid reference: -bad"
        );
    }

    // === FetchError ===

    #[rstest]
    #[case(
        FetchError::NotFound(PathBuf::from("/repo/.github/slash-commands.yaml")),
        "grammar file not found: /repo/.github/slash-commands.yaml"
    )]
    #[case(
        FetchError::GitShow {
            reference: "main:commands.yaml".to_string(),
            message: "fatal: invalid object name 'main'".to_string(),
        },
        "git show failed for 'main:commands.yaml': fatal: invalid object name 'main'"
    )]
    fn fetch_error_display(#[case] error: FetchError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    // === ValidationError ===

    fn path(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case::missing_commands(
        ValidationError::MissingCommands,
        "Configuration error: missing `commands` array"
    )]
    #[case::missing_name(
        ValidationError::MissingName,
        "Configuration error: a command is missing the `name` property"
    )]
    #[case::both(
        ValidationError::ResultAndCommands { path: path(&["order", "pizza"]) },
        "Configuration error: `order pizza` must contain either a `result` or `commands` property, but not both"
    )]
    #[case::neither(
        ValidationError::NoResultOrCommands { path: path(&["order"]) },
        "Configuration error: `order` must contain either a `result` or `commands` property"
    )]
    #[case::commands_not_list(
        ValidationError::CommandsNotList { path: path(&["rebuild"]) },
        "Configuration error: `rebuild` has a `commands` property that is not a list"
    )]
    #[case::schema(
        ValidationError::Schema("invalid type: integer `5`, expected a string".to_string()),
        "Configuration error: invalid type: integer `5`, expected a string"
    )]
    fn validation_error_display(#[case] error: ValidationError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn validation_error_into_anyhow() {
        let anyhow_err: anyhow::Error = ValidationError::MissingName.into();
        assert_eq!(
            anyhow_err.to_string(),
            "Configuration error: a command is missing the `name` property"
        );
    }
}
