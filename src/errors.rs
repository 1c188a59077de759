use thiserror::Error;

/// Failures of a single catalog fetch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The locator does not resolve to a resource upstream
    #[error("resource not found: {0}")]
    NotFound(String),
    /// Connection, timeout or non-success status other than 404
    #[error("transport error fetching {locator}: {message}")]
    Transport { locator: String, message: String },
    /// The response body is not the expected resource shape
    #[error("malformed resource at {locator}: {message}")]
    Decode { locator: String, message: String },
}

impl CatalogError {
    pub fn transport(locator: impl Into<String>, message: impl ToString) -> Self {
        Self::Transport {
            locator: locator.into(),
            message: message.to_string(),
        }
    }

    pub fn decode(locator: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            locator: locator.into(),
            message: message.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

/// Main error type for the aggregation engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid or inconsistent engine configuration
    #[error("configuration error: {0}")]
    Config(String),
    /// Configuration file could not be read
    #[error("configuration io error: {0}")]
    ConfigIo(#[from] std::io::Error),
    /// Configuration file is not valid RON
    #[error("configuration parse error: {0}")]
    ConfigParse(String),
    /// A required catalog fetch failed
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    /// Text that cannot be used as a catalog identifier
    #[error("invalid identifier: '{0}'")]
    InvalidIdentifier(String),
    /// The species exists but links to no evolution chain
    #[error("species '{0}' has no evolution chain")]
    MissingEvolutionChain(String),
}

impl EngineError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<ron::error::SpannedError> for EngineError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::ConfigParse(err.to_string())
    }
}

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;
