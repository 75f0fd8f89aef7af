//! # Stockdash Core
//!
//! Price-history dashboard for a fixed list of NSE-listed companies.
//!
//! ## Overview
//!
//! - **Catalog** of 49 companies with a case-insensitive search filter
//! - **Dashboard** controller: selection, sidebar, search query, refresh
//! - **Fetch lifecycle** with a generation guard against stale responses
//! - **History client** for `GET <base>/stock/<symbol>`
//! - **Chart derivation** into a Chart.js-shaped configuration
//! - **View model** describing header, sidebar, and content panel
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Static company table and filter |
//! | [`chart`] | Chart configuration derivation |
//! | [`config`] | Service connection settings |
//! | [`dashboard`] | Selection controller and fetch driver |
//! | [`domain`] | Symbol, company, series, and trend types |
//! | [`error`] | Validation and fetch errors |
//! | [`history`] | Price-history service client |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`lifecycle`] | Fetch state machine |
//! | [`view`] | Serializable dashboard snapshot |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockdash_core::{Catalog, Dashboard, DashboardConfig, HistoryClient, Viewport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DashboardConfig::default();
//!     let mut dashboard = Dashboard::new(HistoryClient::from_config(&config));
//!
//!     let infosys = Catalog::builtin().resolve("INFY.NS")?.clone();
//!     dashboard.select(infosys);
//!     dashboard.settle().await;
//!
//!     println!("{}", serde_json::to_string_pretty(&dashboard.view(Viewport::default()))?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐   select / refresh   ┌──────────────────┐
//! │  CLI / Surface  │─────────────────────▶│    Dashboard     │
//! └────────▲────────┘                      └───┬──────────▲───┘
//!          │ DashboardView                     │ spawn    │ Completion
//!          │                                   ▼          │ (mpsc)
//! ┌────────┴────────┐                      ┌──────────────┴───┐
//! │ chart / view    │◀── FetchLifecycle ───│  HistoryClient   │
//! └─────────────────┘                      └──────────────────┘
//! ```

pub mod catalog;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod history;
pub mod http_client;
pub mod lifecycle;
pub mod view;

pub use catalog::{filter_companies, Catalog};
pub use chart::{chart_config, ChartRenderConfig, Palette, Viewport, ViewportBucket};
pub use config::{DashboardConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use dashboard::{Completion, Dashboard};
pub use domain::{ChartSeries, Company, PriceHistoryPayload, Symbol, Trend};
pub use error::{FetchError, ValidationError};
pub use history::{parse_history, HistoryClient};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, ScriptedHttpClient,
};
pub use lifecycle::{Commit, FetchLifecycle, FetchPhase, FetchState, FetchTicket};
pub use view::{DashboardView, Panel};
