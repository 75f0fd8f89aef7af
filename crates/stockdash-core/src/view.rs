//! Serializable snapshot of everything the dashboard shows.

use serde::Serialize;

use crate::chart::{chart_config, ChartRenderConfig, Viewport, ViewportBucket};
use crate::{Company, FetchPhase, FetchState, Trend};

pub const LOADING_MESSAGE: &str = "Loading stock data...";
pub const ERROR_TITLE: &str = "Error Loading Data";
pub const CHART_TITLE: &str = "Price Chart";
pub const CHART_SUBTITLE: &str = "1-month price history";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub header: Header,
    pub sidebar: Sidebar,
    pub panel: Panel,
    pub viewport: ViewportBucket,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub name: String,
    pub symbol: String,
    /// Badge shown once a series is on screen and nothing is in flight.
    pub live: bool,
    /// The refresh control spins while a request is in flight.
    pub refreshing: bool,
    pub phase: FetchPhase,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sidebar {
    pub open: bool,
    pub query: String,
    pub entries: Vec<SidebarEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarEntry {
    pub name: String,
    pub symbol: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    Idle,
    Loading {
        message: &'static str,
    },
    Error {
        title: &'static str,
        message: String,
    },
    Chart {
        title: &'static str,
        subtitle: &'static str,
        trend: Trend,
        points: usize,
        first: Option<f64>,
        last: Option<f64>,
        config: Box<ChartRenderConfig>,
    },
}

impl Panel {
    pub fn from_state(state: &FetchState, viewport: Viewport) -> Self {
        match state {
            FetchState::Idle => Self::Idle,
            FetchState::Loading => Self::Loading {
                message: LOADING_MESSAGE,
            },
            FetchState::Failed(error) => Self::Error {
                title: ERROR_TITLE,
                message: error.to_string(),
            },
            FetchState::Loaded(series) => Self::Chart {
                title: CHART_TITLE,
                subtitle: CHART_SUBTITLE,
                trend: series.trend,
                points: series.len(),
                first: series.first_value(),
                last: series.last_value(),
                config: Box::new(chart_config(series, viewport)),
            },
        }
    }
}

impl DashboardView {
    pub fn build(
        selected: &Company,
        entries: &[&Company],
        query: &str,
        sidebar_open: bool,
        state: &FetchState,
        viewport: Viewport,
    ) -> Self {
        Self {
            header: Header {
                name: selected.name.clone(),
                symbol: selected.symbol.to_string(),
                live: matches!(state, FetchState::Loaded(_)),
                refreshing: state.is_loading(),
                phase: state.phase(),
            },
            sidebar: Sidebar {
                open: sidebar_open,
                query: query.to_owned(),
                entries: entries
                    .iter()
                    .map(|company| SidebarEntry {
                        name: company.name.clone(),
                        symbol: company.symbol.to_string(),
                        selected: company.same_listing(selected),
                    })
                    .collect(),
            },
            panel: Panel::from_state(state, viewport),
            viewport: viewport.bucket(),
        }
    }
}
