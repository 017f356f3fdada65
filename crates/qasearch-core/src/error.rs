use thiserror::Error;

/// Rejection of an inbound search request. Raised before any condition exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error("query is {len} characters long, at most {max} allowed")]
    QueryTooLong { len: usize, max: usize },

    #[error("page must be at least 1, got {0}")]
    PageOutOfRange(u32),

    #[error("page size must be between 1 and {max}, got {size}")]
    PageSizeOutOfRange { size: u32, max: u32 },

    #[error("unknown order '{0}', expected one of newest, active, score, relevance")]
    UnknownOrder(String),
}

impl ValidationError {
    /// Name of the inbound parameter that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyQuery | Self::QueryTooLong { .. } => "q",
            Self::PageOutOfRange(_) => "page",
            Self::PageSizeOutOfRange { .. } => "size",
            Self::UnknownOrder(_) => "order",
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Search backend failed: {0:#}")]
    Backend(anyhow::Error),

    #[error("Loading search object failed: {0:#}")]
    Loader(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
