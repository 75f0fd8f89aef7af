//! Fetch-render state machine.
//!
//! ```text
//!  Idle ──begin──▶ Loading ──complete(current)──▶ Loaded | Failed
//!                     ▲                               │
//!                     └────────────begin──────────────┘
//! ```
//!
//! Every [`FetchLifecycle::begin`] bumps a generation counter and hands out a
//! [`FetchTicket`]. A completion is committed only while its ticket still
//! carries the current generation; anything older is discarded as stale.

use serde::Serialize;

use crate::{ChartSeries, Company, FetchError};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded(ChartSeries),
    Failed(FetchError),
}

impl FetchState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn series(&self) -> Option<&ChartSeries> {
        match self {
            Self::Loaded(series) => Some(series),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Text for the error panel, if the last cycle failed.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub const fn phase(&self) -> FetchPhase {
        match self {
            Self::Idle => FetchPhase::Idle,
            Self::Loading => FetchPhase::Loading,
            Self::Loaded(_) => FetchPhase::Loaded,
            Self::Failed(_) => FetchPhase::Failed,
        }
    }
}

/// Payload-free tag of a [`FetchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Receipt for one outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    company: Company,
}

impl FetchTicket {
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn company(&self) -> &Company {
        &self.company
    }
}

/// Result of offering a completion to the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Applied,
    Stale,
}

#[derive(Debug, Default)]
pub struct FetchLifecycle {
    state: FetchState,
    generation: u64,
    stale_discards: u64,
}

impl FetchLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Completions dropped because a newer trigger had already started.
    pub const fn stale_discards(&self) -> u64 {
        self.stale_discards
    }

    /// Starts a new cycle for `company`, dropping any loaded series or error.
    pub fn begin(&mut self, company: &Company) -> FetchTicket {
        self.generation += 1;
        self.state = FetchState::Loading;
        FetchTicket {
            generation: self.generation,
            company: company.clone(),
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && self.state.is_loading()
    }

    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<ChartSeries, FetchError>,
    ) -> Commit {
        if !self.is_current(ticket) {
            self.stale_discards += 1;
            return Commit::Stale;
        }

        self.state = match outcome {
            Ok(series) => FetchState::Loaded(series),
            Err(error) => FetchState::Failed(error),
        };
        Commit::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(symbol: &str) -> Company {
        Company::new(symbol, symbol).expect("valid company")
    }

    fn series(values: &[f64]) -> ChartSeries {
        let labels = (0..values.len()).map(|i| format!("d{i}")).collect();
        ChartSeries::new("test", labels, values.to_vec())
    }

    #[test]
    fn starts_idle() {
        let lifecycle = FetchLifecycle::new();
        assert_eq!(lifecycle.state(), &FetchState::Idle);
        assert_eq!(lifecycle.generation(), 0);
    }

    #[test]
    fn begin_discards_previous_result() {
        let mut lifecycle = FetchLifecycle::new();
        let first = lifecycle.begin(&company("INFY.NS"));
        lifecycle.complete(&first, Ok(series(&[1.0, 2.0])));
        assert!(lifecycle.state().series().is_some());

        lifecycle.begin(&company("INFY.NS"));
        assert_eq!(lifecycle.state(), &FetchState::Loading);
    }

    #[test]
    fn only_the_latest_ticket_commits() {
        let mut lifecycle = FetchLifecycle::new();
        let a = lifecycle.begin(&company("TCS.NS"));
        let b = lifecycle.begin(&company("INFY.NS"));

        assert_eq!(lifecycle.complete(&b, Ok(series(&[1.0, 2.0]))), Commit::Applied);
        assert_eq!(
            lifecycle.complete(&a, Err(FetchError::Status(500))),
            Commit::Stale
        );
        assert!(lifecycle.state().series().is_some());
        assert_eq!(lifecycle.stale_discards(), 1);
    }

    #[test]
    fn a_ticket_commits_at_most_once() {
        let mut lifecycle = FetchLifecycle::new();
        let ticket = lifecycle.begin(&company("TCS.NS"));

        assert_eq!(
            lifecycle.complete(&ticket, Err(FetchError::Status(404))),
            Commit::Applied
        );
        assert_eq!(
            lifecycle.complete(&ticket, Ok(series(&[1.0]))),
            Commit::Stale
        );
        assert_eq!(
            lifecycle.state().error_message().as_deref(),
            Some("HTTP 404")
        );
    }
}
