use thiserror::Error;

/// Validation and contract errors exposed by `stockdash-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },
    #[error("exchange suffix must be 1 to {max} ASCII letters: '{suffix}'")]
    InvalidExchangeSuffix { suffix: String, max: usize },

    #[error("company name cannot be empty")]
    EmptyCompanyName,
    #[error("catalog must contain at least one company")]
    EmptyCatalog,
    #[error("no company in the catalog matches '{needle}'")]
    UnknownCompany { needle: String },
    #[error("'{needle}' matches {count} companies; be more specific")]
    AmbiguousCompany { needle: String, count: usize },

    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}

/// Failure of one price-history fetch cycle.
///
/// The `Display` text is the human-readable message shown in the error panel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The transport failed before a response arrived.
    #[error("{0}")]
    Transport(String),

    /// The request did not complete within the configured budget.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// The service answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The service answered 2xx but reported an error in the payload.
    #[error("{0}")]
    Application(String),

    /// The body did not match `{ dates, prices, error? }`.
    #[error("invalid response body: {0}")]
    Parse(String),
}

impl FetchError {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "fetch.transport",
            Self::Timeout { .. } => "fetch.timeout",
            Self::Status(_) => "fetch.status",
            Self::Application(_) => "fetch.application",
            Self::Parse(_) => "fetch.parse",
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}
