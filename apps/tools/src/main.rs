use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use shared::{
    domain::{CalendarAnchor, Company},
    query::SortQuery,
};
use sorting::sort_companies;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;
mod render;

use config::{load_settings, Settings};
use render::{render, render_terms, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "roster", about = "Order a company roster for table display")]
struct Cli {
    /// Settings file. Defaults to ./roster.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct AnchorArgs {
    #[arg(long, requires = "anchor_semester")]
    anchor_year: Option<i32>,
    /// 0 for the first semester of the year, 1 for the second.
    #[arg(long, requires = "anchor_year")]
    anchor_semester: Option<u8>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort a JSON roster and print it.
    Sort {
        roster: PathBuf,
        /// Raw query string, e.g. "sortBy=sem1&ascending=true".
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        sort_by: Option<String>,
        /// Only the literal "true" sorts ascending.
        #[arg(long)]
        ascending: Option<String>,
        #[command(flatten)]
        anchor: AnchorArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Print the terms the three status columns resolve to.
    Terms {
        #[command(flatten)]
        anchor: AnchorArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Sort {
            roster,
            query,
            sort_by,
            ascending,
            anchor,
            format,
        } => {
            let anchor = resolve_anchor(&anchor, &settings)?;
            let query = build_query(query.as_deref(), sort_by, ascending, &settings);

            let raw = fs::read_to_string(&roster)
                .with_context(|| format!("failed to read roster '{}'", roster.display()))?;
            let mut companies: Vec<Company> = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse roster '{}'", roster.display()))?;

            info!(
                companies = companies.len(),
                sort_by = %query.sort_key(),
                ascending = query.is_ascending(),
                %anchor,
                "sorting roster"
            );
            sort_companies(&mut companies, &query, anchor);
            print!("{}", render(&companies, anchor, format)?);
        }
        Command::Terms { anchor, format } => {
            let anchor = resolve_anchor(&anchor, &settings)?;
            print!("{}", render_terms(anchor, format)?);
        }
    }

    Ok(())
}

/// Flags first, then settings, then the current date.
fn resolve_anchor(args: &AnchorArgs, settings: &Settings) -> Result<CalendarAnchor> {
    if let (Some(year), Some(semester)) = (args.anchor_year, args.anchor_semester) {
        return CalendarAnchor::try_from_raw(year, semester).context("invalid --anchor-semester");
    }
    if let Some(anchor) = settings.anchor()? {
        return Ok(anchor);
    }
    let today = chrono::Local::now().date_naive();
    debug!(%today, "no anchor configured, deriving from current date");
    Ok(CalendarAnchor::for_date(today))
}

/// Explicit flags override the query string; the configured default sort fills a gap.
fn build_query(
    raw: Option<&str>,
    sort_by: Option<String>,
    ascending: Option<String>,
    settings: &Settings,
) -> SortQuery {
    let mut query = raw.map(SortQuery::from_query_string).unwrap_or_default();
    if sort_by.is_some() {
        query.sort_by = sort_by;
    }
    if ascending.is_some() {
        query.ascending = ascending;
    }
    if query.sort_by.is_none() {
        query.sort_by = settings.default_sort.clone();
    }
    query
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
