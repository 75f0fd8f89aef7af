//! CLI argument definitions for stockdash.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `companies` | List the catalog, optionally filtered |
//! | `chart` | Fetch one company's history and print the dashboard view |
//! | `interactive` | Line-driven dashboard session on stdin |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--base-url` | public service | Price-history service root |
//! | `--timeout-ms` | `10000` | Per-request timeout in ms |
//! | `--viewport-width` | `1280` | Width used for chart tick layout |
//! | `--user-agent` | `stockdash/<version>` | User-Agent sent to the service |
//! | `--verbose` | `false` | Debug logging on stderr |

use clap::{Args, Parser, Subcommand, ValueEnum};
use stockdash_core::{DashboardConfig, Viewport, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};

/// Stockdash - price history for NSE blue chips
#[derive(Debug, Parser)]
#[command(
    name = "stockdash",
    author,
    version,
    about = "Price-history dashboard for NSE-listed companies",
    long_about = "Browse one-month price history for a fixed list of Indian listed \
companies. Pick a company by symbol or name; the history is fetched from the \
price-history service and rendered as a chart configuration.\n\
\n\
Use 'stockdash <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Root URL of the price-history service.
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Viewport width in pixels; below 768 the chart uses the compact axis layout.
    #[arg(long, global = true, default_value_t = 1280)]
    pub viewport_width: u32,

    /// User-Agent header for history requests.
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Log fetch activity to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn config(&self) -> DashboardConfig {
        let config = DashboardConfig::default()
            .with_base_url(self.base_url.clone())
            .with_timeout_ms(self.timeout_ms);
        match &self.user_agent {
            Some(user_agent) => config.with_user_agent(user_agent.clone()),
            None => config,
        }
    }

    pub const fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalog companies whose name or symbol contains QUERY.
    ///
    /// # Examples
    ///
    ///   stockdash companies
    ///   stockdash companies bank --format table
    Companies(CompaniesArgs),

    /// Fetch price history for one company and print the dashboard view.
    ///
    /// Exits with code 3 when the fetch fails; the view still carries the
    /// error panel.
    ///
    /// # Examples
    ///
    ///   stockdash chart INFY.NS
    ///   stockdash chart "larsen" --viewport-width 375 --pretty
    Chart(ChartArgs),

    /// Interactive session: search, select, refresh while fetches run.
    Interactive,
}

/// Arguments for the `companies` command.
#[derive(Debug, Args)]
pub struct CompaniesArgs {
    /// Case-insensitive substring of a name or symbol.
    #[arg(default_value = "")]
    pub query: String,
}

/// Arguments for the `chart` command.
#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Symbol (e.g. INFY.NS), exact name, or a unique part of a name.
    pub company: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_flow_into_config() {
        let cli = Cli::try_parse_from([
            "stockdash",
            "chart",
            "INFY.NS",
            "--base-url",
            "http://localhost:8000",
            "--timeout-ms",
            "2500",
            "--viewport-width",
            "375",
            "--user-agent",
            "desk-terminal/2",
        ])
        .expect("arguments parse");

        let config = cli.config();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_ms, 2500);
        assert_eq!(config.user_agent, "desk-terminal/2");
        assert_eq!(cli.viewport().width, 375);
        assert!(matches!(cli.command, Command::Chart(ChartArgs { ref company }) if company == "INFY.NS"));
    }

    #[test]
    fn companies_query_defaults_to_empty() {
        let cli = Cli::try_parse_from(["stockdash", "companies"]).expect("arguments parse");
        match &cli.command {
            Command::Companies(args) => assert_eq!(args.query, ""),
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config().base_url, DEFAULT_BASE_URL);
        assert!(cli.config().user_agent.starts_with("stockdash/"));
    }
}
