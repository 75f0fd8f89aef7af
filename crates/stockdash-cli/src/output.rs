use serde::Serialize;
use serde_json::json;

use stockdash_core::{Company, DashboardView, Panel, Symbol};

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = json!({
                "data": result.data,
                "errors": result.errors,
            });
            print_json(&payload, pretty)?;
        }
        OutputFormat::Table => {
            for line in &result.lines {
                println!("{line}");
            }
            for error in &result.errors {
                println!("error       : {} ({})", error.message, error.code);
            }
        }
    }

    Ok(())
}

pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{payload}");
    Ok(())
}

/// One line per company; the selected one is starred.
pub fn company_lines(companies: &[&Company], selected: Option<&Symbol>) -> Vec<String> {
    companies
        .iter()
        .map(|company| {
            let marker = match selected {
                Some(symbol) if *symbol == company.symbol => '*',
                _ => ' ',
            };
            format!("{marker} {:<16} {}", company.symbol.as_str(), company.name)
        })
        .collect()
}

pub fn view_lines(view: &DashboardView) -> Vec<String> {
    let mut lines = vec![
        format!("company     : {} ({})", view.header.name, view.header.symbol),
        format!("phase       : {}", status_word(view)),
    ];

    match &view.panel {
        Panel::Idle => {}
        Panel::Loading { message } => lines.push(format!("status      : {message}")),
        Panel::Error { title, message } => {
            lines.push(format!("status      : {title}"));
            lines.push(format!("message     : {message}"));
        }
        Panel::Chart {
            title,
            subtitle,
            trend,
            points,
            first,
            last,
            config,
        } => {
            lines.push(format!("chart       : {title} ({subtitle})"));
            lines.push(format!("points      : {points}"));
            if let (Some(first_date), Some(last_date)) =
                (config.data.labels.first(), config.data.labels.last())
            {
                lines.push(format!("dates       : {first_date} .. {last_date}"));
            }
            if let (Some(first), Some(last)) = (first, last) {
                lines.push(format!("range       : {first:.2} -> {last:.2}"));
            }
            lines.push(format!("trend       : {}", trend.as_str()));
            if let Some(dataset) = config.data.datasets.first() {
                lines.push(format!("color       : {}", dataset.border_color));
            }
        }
    }

    lines
}

/// Compact single-line summary printed after each committed fetch.
pub fn status_line(view: &DashboardView) -> String {
    let subject = format!("{} ({})", view.header.name, view.header.symbol);
    match &view.panel {
        Panel::Idle => format!("[idle] {subject}"),
        Panel::Loading { message } => format!("[loading] {subject} {message}"),
        Panel::Error { title, message } => format!("[error] {subject} {title}: {message}"),
        Panel::Chart {
            trend,
            points,
            first,
            last,
            ..
        } => match (first, last) {
            (Some(first), Some(last)) => format!(
                "[live] {subject} {points} points {first:.2} -> {last:.2} ({})",
                trend.as_str()
            ),
            _ => format!("[live] {subject} no data points"),
        },
    }
}

fn status_word(view: &DashboardView) -> &'static str {
    if view.header.refreshing {
        "refreshing"
    } else if view.header.live {
        "live"
    } else {
        match view.panel {
            Panel::Error { .. } => "failed",
            _ => "idle",
        }
    }
}
