use thiserror::Error;

/// Errors raised when an example rejects an illegal input.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Logarithm of non-positive number: {value}")]
    NonPositiveLogarithm { value: f64 },

    #[error("Unauthorized access to user data")]
    UnauthorizedAccess { user: String },

    #[error("Unknown user: {user}")]
    UnknownUser { user: String },

    #[error("Nothing left to restore: history is empty")]
    EmptyHistory,

    #[error("Malformed expression '{expression}': {reason}")]
    MalformedExpression { expression: String, reason: String },

    #[error("No payment strategy selected")]
    MissingStrategy,

    #[error("At least one recipient is required")]
    NoRecipients,

    #[error("Too many recipients: {count} (max {max})")]
    TooManyRecipients { count: usize, max: usize },

    #[error("Unknown demo: '{name}'")]
    UnknownDemo { name: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PatternError {
    pub fn malformed(expression: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedExpression {
            expression: expression.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for PatternError {
    fn from(err: toml::de::Error) -> Self {
        PatternError::Config(err.message().to_string())
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_original_wording() {
        assert_eq!(PatternError::DivisionByZero.to_string(), "Division by zero");
        let err = PatternError::UnauthorizedAccess {
            user: "bob".into(),
        };
        assert_eq!(err.to_string(), "Unauthorized access to user data");
    }

    #[test]
    fn test_malformed_helper() {
        let err = PatternError::malformed("2 +", "missing operand");
        assert_eq!(err.to_string(), "Malformed expression '2 +': missing operand");
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
        let err = PatternError::from(parse);
        assert!(matches!(err, PatternError::Config(_)));
    }
}
