use crate::ValidationError;

/// Public deployment of the price-history service.
pub const DEFAULT_BASE_URL: &str = "https://stock-history-i9qf.onrender.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for the history service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("stockdash/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl DashboardConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl {
                value: self.base_url.clone(),
            });
        }
        if self.timeout_ms == 0 {
            return Err(ValidationError::ZeroTimeout);
        }
        Ok(())
    }

    /// Base URL without trailing slashes, ready for path joining.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}
