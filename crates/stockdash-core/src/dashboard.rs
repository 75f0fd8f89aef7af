//! Selection controller and fetch driver.
//!
//! [`Dashboard`] is owned by a single task. Each trigger spawns one Tokio
//! task for the request; the task reports back through an unbounded channel
//! and the owner commits the result with [`Dashboard::apply`]. Nothing is
//! shared between tasks except the immutable [`HistoryClient`].

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::chart::Viewport;
use crate::lifecycle::{Commit, FetchLifecycle, FetchState, FetchTicket};
use crate::view::DashboardView;
use crate::{Catalog, ChartSeries, Company, FetchError, HistoryClient};

/// Outcome of one spawned request, tagged with the ticket it was issued for.
#[derive(Debug)]
pub struct Completion {
    pub ticket: FetchTicket,
    pub outcome: Result<ChartSeries, FetchError>,
}

pub struct Dashboard {
    catalog: &'static Catalog,
    history: Arc<HistoryClient>,
    selected: Company,
    search_query: String,
    sidebar_open: bool,
    lifecycle: FetchLifecycle,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
}

impl Dashboard {
    /// Dashboard over the built-in catalog, with its first company selected.
    /// Nothing is fetched until [`Dashboard::start`] runs.
    pub fn new(history: HistoryClient) -> Self {
        Self::with_catalog(Catalog::builtin(), history)
    }

    /// Dashboard over `catalog`, with its first company selected.
    pub fn with_catalog(catalog: &'static Catalog, history: HistoryClient) -> Self {
        let selected = catalog.first().clone();
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        Self {
            catalog,
            history: Arc::new(history),
            selected,
            search_query: String::new(),
            sidebar_open: false,
            lifecycle: FetchLifecycle::new(),
            completions_tx,
            completions_rx,
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn selected(&self) -> &Company {
        &self.selected
    }

    pub fn state(&self) -> &FetchState {
        self.lifecycle.state()
    }

    pub const fn generation(&self) -> u64 {
        self.lifecycle.generation()
    }

    pub const fn stale_discards(&self) -> u64 {
        self.lifecycle.stale_discards()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub const fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Fetches the initial selection. Must run inside a Tokio runtime.
    pub fn start(&mut self) -> FetchTicket {
        self.trigger()
    }

    /// Selects `company` and closes the sidebar.
    ///
    /// Returns the ticket of the new fetch, or `None` when the symbol is
    /// already selected and has been fetched at least once. Must run inside
    /// a Tokio runtime.
    pub fn select(&mut self, company: Company) -> Option<FetchTicket> {
        self.sidebar_open = false;

        let never_fetched = matches!(self.lifecycle.state(), FetchState::Idle);
        if company.same_listing(&self.selected) && !never_fetched {
            debug!(symbol = %company.symbol, "selection unchanged");
            self.selected = company;
            return None;
        }

        self.selected = company;
        Some(self.trigger())
    }

    /// Re-fetches the current selection unconditionally.
    /// Must run inside a Tokio runtime.
    pub fn refresh(&mut self) -> FetchTicket {
        self.trigger()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn filtered_companies(&self) -> Vec<&'static Company> {
        self.catalog.filter(&self.search_query)
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Waits for the next finished request. Cancel-safe.
    pub async fn next_completion(&mut self) -> Completion {
        match self.completions_rx.recv().await {
            Some(completion) => completion,
            // The sender lives in `self`, so the channel never closes.
            None => std::future::pending().await,
        }
    }

    /// Commits `completion` if it belongs to the latest trigger.
    pub fn apply(&mut self, completion: Completion) -> Commit {
        let Completion { ticket, outcome } = completion;
        let succeeded = outcome.is_ok();
        let commit = self.lifecycle.complete(&ticket, outcome);

        match commit {
            Commit::Applied => info!(
                symbol = %ticket.company().symbol,
                generation = ticket.generation(),
                succeeded,
                "fetch committed"
            ),
            Commit::Stale => warn!(
                symbol = %ticket.company().symbol,
                generation = ticket.generation(),
                current = self.lifecycle.generation(),
                "discarding stale fetch result"
            ),
        }

        commit
    }

    /// Waits for one completion and applies it.
    pub async fn next_commit(&mut self) -> Commit {
        let completion = self.next_completion().await;
        self.apply(completion)
    }

    /// Applies completions until the current cycle has committed.
    pub async fn settle(&mut self) -> &FetchState {
        while self.lifecycle.state().is_loading() {
            self.next_commit().await;
        }
        self.lifecycle.state()
    }

    pub fn view(&self, viewport: Viewport) -> DashboardView {
        DashboardView::build(
            &self.selected,
            &self.filtered_companies(),
            &self.search_query,
            self.sidebar_open,
            self.lifecycle.state(),
            viewport,
        )
    }

    fn trigger(&mut self) -> FetchTicket {
        let ticket = self.lifecycle.begin(&self.selected);
        debug!(
            symbol = %ticket.company().symbol,
            generation = ticket.generation(),
            "fetch started"
        );

        let history = Arc::clone(&self.history);
        let tx = self.completions_tx.clone();
        let task_ticket = ticket.clone();
        tokio::spawn(async move {
            let outcome = history.fetch(task_ticket.company()).await;
            // The receiver only disappears with the dashboard itself.
            let _ = tx.send(Completion {
                ticket: task_ticket,
                outcome,
            });
        });

        ticket
    }
}
