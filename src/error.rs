use thiserror::Error;

/// Why an address was rejected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Nothing left after trimming.
    Empty,
    /// Whitespace inside the address.
    Whitespace,
    /// Zero or more than one `@`.
    AtCount,
    /// The domain failed the structural check.
    InvalidDomain,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            InvalidReason::Empty => "address is empty",
            InvalidReason::Whitespace => "address contains whitespace",
            InvalidReason::AtCount => "address must contain exactly one '@'",
            InvalidReason::InvalidDomain => "domain is not valid",
        };
        f.write_str(msg)
    }
}

/// Errors returned synchronously by [`crate::validation::parser::EmailParser::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    /// `email` holds the trimmed input and is the only thing worth reporting back.
    #[error("invalid email '{email}': {reason}")]
    InvalidFormat { email: String, reason: InvalidReason },
}

impl EmailError {
    pub fn reason(&self) -> InvalidReason {
        match self {
            EmailError::InvalidFormat { reason, .. } => *reason,
        }
    }
}

/// Errors from a blocklist refresh. None of them touch the active set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshError {
    #[error("failed to fetch blocklist: {0}")]
    Fetch(String),
    #[error("failed to read blocklist content: {0}")]
    Parse(String),
    #[error("blocklist refresh canceled")]
    Canceled,
}

impl RefreshError {
    pub fn is_canceled(&self) -> bool {
        matches!(self, RefreshError::Canceled)
    }
}

impl From<reqwest::Error> for RefreshError {
    fn from(err: reqwest::Error) -> Self {
        RefreshError::Fetch(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {name} has invalid value '{value}'")]
    InvalidValue { name: &'static str, value: String },
}
