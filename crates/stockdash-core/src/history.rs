//! Client for the remote price-history service.
//!
//! One call to [`HistoryClient::fetch`] issues exactly one
//! `GET <base>/stock/<symbol>` and folds every failure mode (transport,
//! status, payload error, malformed body, timeout) into a [`FetchError`].

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{ChartSeries, Company, DashboardConfig, FetchError, PriceHistoryPayload, Symbol};

#[derive(Clone)]
pub struct HistoryClient {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl HistoryClient {
    pub fn new(http_client: Arc<dyn HttpClient>, config: &DashboardConfig) -> Self {
        Self {
            http_client,
            base_url: config.normalized_base_url().to_owned(),
            timeout_ms: config.timeout_ms,
        }
    }

    /// Client backed by reqwest, using the configured user agent.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(
            Arc::new(ReqwestHttpClient::new(&config.user_agent)),
            config,
        )
    }

    /// Resource URL for `symbol`; the symbol is percent-encoded as a path segment.
    pub fn history_url(&self, symbol: &Symbol) -> String {
        format!(
            "{}/stock/{}",
            self.base_url,
            urlencoding::encode(symbol.as_str())
        )
    }

    pub async fn fetch(&self, company: &Company) -> Result<ChartSeries, FetchError> {
        let url = self.history_url(&company.symbol);
        debug!(symbol = %company.symbol, %url, "requesting price history");

        let request = HttpRequest::get(url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        // Bounded even when the transport ignores its own timeout.
        let budget = Duration::from_millis(self.timeout_ms);
        let response = match tokio::time::timeout(budget, self.http_client.execute(request)).await
        {
            Err(_) => {
                return Err(FetchError::Timeout {
                    timeout_ms: self.timeout_ms,
                })
            }
            Ok(Err(error)) if error.timed_out() => {
                return Err(FetchError::Timeout {
                    timeout_ms: self.timeout_ms,
                })
            }
            Ok(Err(error)) => return Err(FetchError::Transport(error.message().to_owned())),
            Ok(Ok(response)) => response,
        };

        if !response.is_success() {
            return Err(FetchError::Status(response.status));
        }

        parse_history(company, &response.body)
    }
}

/// Parses a 2xx body into a series for `company`.
pub fn parse_history(company: &Company, body: &str) -> Result<ChartSeries, FetchError> {
    PriceHistoryPayload::from_json(body)?.into_series(company)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::{HttpError, HttpResponse, ScriptedHttpClient};
    use crate::Trend;

    fn client(scripted: Arc<ScriptedHttpClient>) -> HistoryClient {
        HistoryClient::new(
            scripted,
            &DashboardConfig::default().with_base_url("http://history.test/"),
        )
    }

    #[test]
    fn symbols_are_percent_encoded_into_the_path() {
        let history = client(Arc::new(ScriptedHttpClient::new()));

        let mm = Symbol::parse("M&M.NS").expect("valid");
        let bajaj = Symbol::parse("BAJAJ-AUTO.NS").expect("valid");
        assert_eq!(history.history_url(&mm), "http://history.test/stock/M%26M.NS");
        assert_eq!(
            history.history_url(&bajaj),
            "http://history.test/stock/BAJAJ-AUTO.NS"
        );
    }

    #[tokio::test]
    async fn successful_fetch_builds_series_with_trend() {
        let scripted = Arc::new(ScriptedHttpClient::new());
        scripted.respond(
            "http://history.test/stock/WIPRO.NS",
            Ok(HttpResponse::ok_json(
                r#"{"dates":["2024-01-01","2024-01-02","2024-01-03"],"prices":[480.5,470.0,479.9]}"#,
            )),
        );
        let wipro = Company::new("Wipro", "WIPRO.NS").expect("valid");

        let series = client(scripted.clone()).fetch(&wipro).await.expect("series");

        assert_eq!(series.len(), 3);
        assert_eq!(series.trend, Trend::Negative);
        assert_eq!(series.label, "Wipro (WIPRO.NS)");
        let requests = scripted.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].timeout_ms, 10_000);
    }

    #[tokio::test]
    async fn non_success_status_maps_to_status_error() {
        let scripted = Arc::new(ScriptedHttpClient::new());
        scripted.respond(
            "http://history.test/stock/WIPRO.NS",
            Ok(HttpResponse::new(503, "unavailable")),
        );
        let wipro = Company::new("Wipro", "WIPRO.NS").expect("valid");

        let error = client(scripted).fetch(&wipro).await.expect_err("503");
        assert_eq!(error, FetchError::Status(503));
        assert_eq!(error.to_string(), "HTTP 503");
    }

    #[tokio::test]
    async fn transport_failures_keep_their_description() {
        let scripted = Arc::new(ScriptedHttpClient::new());
        scripted.respond(
            "http://history.test/stock/WIPRO.NS",
            Err(HttpError::new("connection failed: refused")),
        );
        let wipro = Company::new("Wipro", "WIPRO.NS").expect("valid");

        let error = client(scripted).fetch(&wipro).await.expect_err("refused");
        assert_eq!(
            error,
            FetchError::Transport(String::from("connection failed: refused"))
        );
    }

    #[tokio::test]
    async fn transport_timeouts_map_to_timeout_errors() {
        let scripted = Arc::new(ScriptedHttpClient::new());
        scripted.respond(
            "http://history.test/stock/WIPRO.NS",
            Err(HttpError::timeout("request timeout")),
        );
        let wipro = Company::new("Wipro", "WIPRO.NS").expect("valid");

        let error = client(scripted).fetch(&wipro).await.expect_err("timeout");
        assert_eq!(error, FetchError::Timeout { timeout_ms: 10_000 });
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_transport_is_cut_off_by_the_budget() {
        let scripted = Arc::new(ScriptedHttpClient::new());
        let _gate = scripted.respond_later("http://history.test/stock/WIPRO.NS");
        let history = HistoryClient::new(
            scripted,
            &DashboardConfig::default()
                .with_base_url("http://history.test")
                .with_timeout_ms(250),
        );
        let wipro = Company::new("Wipro", "WIPRO.NS").expect("valid");

        let error = history.fetch(&wipro).await.expect_err("stalled");
        assert_eq!(error, FetchError::Timeout { timeout_ms: 250 });
    }
}
