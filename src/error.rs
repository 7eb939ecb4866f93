use std::path::PathBuf;

/// A column that could not accept a piece. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can end a console game early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no legal move available for {0}")]
    NoLegalMove(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::InvalidColumn(9).to_string(), "column 9 is out of range");
        assert_eq!(MoveError::ColumnFull(2).to_string(), "column 2 is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ai.simulations must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ai.simulations must be > 0"
        );
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::NoLegalMove("O");
        assert_eq!(err.to_string(), "no legal move available for O");
    }
}
