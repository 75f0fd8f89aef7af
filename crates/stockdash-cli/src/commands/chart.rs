use stockdash_core::{Catalog, Company, Dashboard, DashboardView, FetchError, HistoryClient, Viewport};

use crate::cli::{ChartArgs, Cli};
use crate::error::CliError;
use crate::output;

use super::{CommandError, CommandResult};

pub async fn run(args: &ChartArgs, cli: &Cli) -> Result<CommandResult, CliError> {
    let config = cli.config();
    config.validate()?;

    let company = Catalog::builtin().resolve(&args.company)?.clone();
    let (view, failure) =
        load_view(HistoryClient::from_config(&config), company, cli.viewport()).await;

    let result = CommandResult::ok(serde_json::to_value(&view)?, output::view_lines(&view));
    Ok(match failure {
        Some(error) => result.with_error(CommandError::from(&error)),
        None => result,
    })
}

/// Selects `company`, waits for its fetch to commit and snapshots the view.
async fn load_view(
    history: HistoryClient,
    company: Company,
    viewport: Viewport,
) -> (DashboardView, Option<FetchError>) {
    let mut dashboard = Dashboard::new(history);
    dashboard.select(company);
    let failure = dashboard.settle().await.error().cloned();
    (dashboard.view(viewport), failure)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use stockdash_core::{DashboardConfig, HttpResponse, Panel, ScriptedHttpClient};

    use super::*;

    const BASE: &str = "http://history.test";

    fn history(scripted: &Arc<ScriptedHttpClient>) -> HistoryClient {
        let config = DashboardConfig::default().with_base_url(BASE);
        HistoryClient::new(scripted.clone(), &config)
    }

    #[tokio::test]
    async fn initial_selection_is_fetched_once() {
        let first = Catalog::builtin().first().clone();
        let scripted = Arc::new(ScriptedHttpClient::new());
        scripted.respond(
            format!("{BASE}/stock/{}", first.symbol),
            Ok(HttpResponse::ok_json(
                r#"{"dates":["2024-01-01","2024-01-02"],"prices":[10.0,12.5]}"#,
            )),
        );

        let (view, failure) = load_view(history(&scripted), first, Viewport::new(1280)).await;

        assert_eq!(scripted.request_count(), 1);
        assert!(matches!(view.panel, Panel::Chart { points: 2, .. }));
        assert!(view.header.live);
        assert_eq!(failure, None);
    }

    #[tokio::test]
    async fn unscripted_symbol_surfaces_an_error_panel_and_code() {
        let scripted = Arc::new(ScriptedHttpClient::new());
        let wipro = Catalog::builtin().resolve("WIPRO.NS").expect("listed").clone();

        let (view, failure) = load_view(history(&scripted), wipro, Viewport::new(375)).await;

        match view.panel {
            Panel::Error { message, .. } => assert_eq!(message, "HTTP 404"),
            other => panic!("expected error panel, got {other:?}"),
        }
        assert_eq!(view.header.symbol, "WIPRO.NS");

        let error = CommandError::from(&failure.expect("fetch failed"));
        assert_eq!(error.code, "fetch.status");
        assert_eq!(error.message, "HTTP 404");
    }
}
