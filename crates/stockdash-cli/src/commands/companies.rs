use serde::Serialize;

use stockdash_core::{Catalog, Company};

use crate::cli::CompaniesArgs;
use crate::error::CliError;
use crate::output;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct CompaniesResponseData<'a> {
    query: &'a str,
    count: usize,
    companies: Vec<&'a Company>,
}

pub fn run(args: &CompaniesArgs) -> Result<CommandResult, CliError> {
    let companies = Catalog::builtin().filter(&args.query);
    let lines = output::company_lines(&companies, None);

    let data = serde_json::to_value(CompaniesResponseData {
        query: &args.query,
        count: companies.len(),
        companies,
    })?;

    Ok(CommandResult::ok(data, lines))
}
