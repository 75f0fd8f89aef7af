mod chart;
mod companies;
mod interactive;

use serde::Serialize;
use serde_json::Value;
use stockdash_core::FetchError;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Machine-readable failure reported alongside command data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandError {
    pub code: &'static str,
    pub message: String,
}

impl From<&FetchError> for CommandError {
    fn from(error: &FetchError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
        }
    }
}

pub struct CommandResult {
    pub data: Value,
    /// Plain-text rendering used by `--format table`.
    pub lines: Vec<String>,
    pub errors: Vec<CommandError>,
}

impl CommandResult {
    pub fn ok(data: Value, lines: Vec<String>) -> Self {
        Self {
            data,
            lines,
            errors: Vec::new(),
        }
    }

    pub fn with_error(mut self, error: CommandError) -> Self {
        self.errors.push(error);
        self
    }
}

/// Runs the selected command. `None` means the command already wrote its
/// own output.
pub async fn run(cli: &Cli) -> Result<Option<CommandResult>, CliError> {
    match &cli.command {
        Command::Companies(args) => companies::run(args).map(Some),
        Command::Chart(args) => chart::run(args, cli).await.map(Some),
        Command::Interactive => {
            interactive::run(cli).await?;
            Ok(None)
        }
    }
}
