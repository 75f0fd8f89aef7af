//! Line-driven dashboard session.
//!
//! Stdin lines and fetch completions are multiplexed on one task, so the
//! prompt stays responsive while a request is in flight and late results
//! for an abandoned selection are dropped by the dashboard.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use stockdash_core::{Catalog, Commit, Completion, Dashboard, HistoryClient, Viewport};

use crate::cli::{Cli, OutputFormat};
use crate::error::CliError;
use crate::output;

const HELP: &str = "\
commands:
  search [TEXT]   filter the company list (empty clears)
  select COMPANY  switch to a symbol, name, or unique part of a name
  refresh         re-fetch the current company
  menu | close    open or close the company list
  list            print the filtered company list
  show            print the full dashboard view
  resize WIDTH    change the viewport width in pixels
  help            print this message
  quit            leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search(String),
    Select(String),
    Refresh,
    Menu,
    Close,
    List,
    Show,
    Resize(u32),
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// The `search` text is everything after the single separator following the
/// verb, kept verbatim so padded queries reach the filter unchanged.
pub fn parse_action(line: &str) -> Result<Option<Action>, String> {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (verb, raw_rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line, ""),
    };
    let rest = raw_rest.trim();

    let action = match verb.to_ascii_lowercase().as_str() {
        "search" | "/" => Action::Search(raw_rest.to_owned()),
        "select" | "s" => {
            if rest.is_empty() {
                return Err(String::from("select needs a company"));
            }
            Action::Select(rest.to_owned())
        }
        "refresh" | "r" => Action::Refresh,
        "menu" | "open" => Action::Menu,
        "close" => Action::Close,
        "list" | "ls" => Action::List,
        "show" => Action::Show,
        "resize" => {
            let width = rest
                .parse::<u32>()
                .map_err(|_| format!("invalid width '{rest}'"))?;
            Action::Resize(width)
        }
        "help" | "?" => Action::Help,
        "quit" | "exit" | "q" => Action::Quit,
        other => return Err(format!("unknown command '{other}'; try 'help'")),
    };

    Ok(Some(action))
}

enum Event {
    Input(Option<String>),
    Completion(Completion),
}

struct Session {
    dashboard: Dashboard,
    viewport: Viewport,
    format: OutputFormat,
    pretty: bool,
}

impl Session {
    /// Applies `action`; returns `false` when the session should end.
    fn perform(&mut self, action: Action) -> Result<bool, CliError> {
        debug!(?action, "session action");
        match action {
            Action::Search(query) => {
                self.dashboard.set_search_query(query);
                self.print_list();
            }
            Action::Select(needle) => match Catalog::builtin().resolve(&needle) {
                Ok(company) => {
                    if self.dashboard.select(company.clone()).is_some() {
                        self.print_status();
                    } else {
                        println!("{} is already selected", company.caption());
                    }
                }
                Err(error) => eprintln!("error: {error}"),
            },
            Action::Refresh => {
                self.dashboard.refresh();
                self.print_status();
            }
            Action::Menu => {
                self.dashboard.open_sidebar();
                self.print_list();
            }
            Action::Close => self.dashboard.close_sidebar(),
            Action::List => self.print_list(),
            Action::Show => self.print_view()?,
            Action::Resize(width) => {
                self.viewport = Viewport::new(width);
                println!("viewport {width}px ({:?})", self.viewport.bucket());
            }
            Action::Help => println!("{HELP}"),
            Action::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn on_completion(&mut self, completion: Completion) {
        if self.dashboard.apply(completion) == Commit::Applied {
            self.print_status();
        }
    }

    fn print_status(&self) {
        println!("{}", output::status_line(&self.dashboard.view(self.viewport)));
    }

    fn print_list(&self) {
        let companies = self.dashboard.filtered_companies();
        if companies.is_empty() {
            println!("no companies match '{}'", self.dashboard.search_query());
            return;
        }
        let selected = &self.dashboard.selected().symbol;
        for line in output::company_lines(&companies, Some(selected)) {
            println!("{line}");
        }
    }

    fn print_view(&self) -> Result<(), CliError> {
        let view = self.dashboard.view(self.viewport);
        match self.format {
            OutputFormat::Json => output::print_json(&view, self.pretty)?,
            OutputFormat::Table => {
                for line in output::view_lines(&view) {
                    println!("{line}");
                }
            }
        }
        Ok(())
    }
}

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.config();
    config.validate()?;

    let mut session = Session {
        dashboard: Dashboard::new(HistoryClient::from_config(&config)),
        viewport: cli.viewport(),
        format: cli.format,
        pretty: cli.pretty,
    };

    println!("type 'help' for commands");
    session.dashboard.start();
    session.print_status();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let event = tokio::select! {
            line = lines.next_line() => Event::Input(line?),
            completion = session.dashboard.next_completion() => Event::Completion(completion),
        };

        match event {
            Event::Input(None) => break,
            Event::Input(Some(line)) => match parse_action(&line) {
                Ok(Some(action)) => {
                    if !session.perform(action)? {
                        break;
                    }
                }
                Ok(None) => {}
                Err(message) => eprintln!("error: {message}"),
            },
            Event::Completion(completion) => session.on_completion(completion),
        }
    }

    Ok(())
}
