//! Command-line driver for the tag search core.
//!
//! # Responsibility
//! - Load one catalog file, read selected tags from arguments, print results.
//! - Print the user-facing notice instead of results when search is refused.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use tagsearch_core::{
    core_version, default_log_level, init_logging, ArticleSearch, ArticleView,
    EmptySelectionPolicy, JsonFileSource, LoggingConfig, MatchPolicy, SearchConfig, SearchError,
    TagSelection,
};

#[derive(Debug, Parser)]
#[command(name = "tagsearch", version, about = "Filter a static article catalog by tags")]
struct Cli {
    /// Path to the catalog JSON (`{"articles": [...]}`).
    catalog: PathBuf,

    /// Selected tag. Repeat the flag or separate values with commas.
    #[arg(short, long = "tag", value_delimiter = ',')]
    tags: Vec<String>,

    /// How multiple tags combine: `any` or `all`.
    #[arg(long = "match", default_value_t = MatchPolicy::Any)]
    match_policy: MatchPolicy,

    /// What an empty selection does: `prompt` or `show-all`.
    #[arg(long, default_value_t = EmptySelectionPolicy::Prompt)]
    empty: EmptySelectionPolicy,

    /// Prefix for detail links.
    #[arg(long, default_value = tagsearch_core::config::DEFAULT_LINK_PREFIX)]
    link_prefix: String,

    /// List the catalog's tags instead of searching.
    #[arg(long)]
    list_tags: bool,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Log level; defaults by build mode.
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; stderr when omitted.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    let logging = LoggingConfig::new(level, cli.log_dir.as_deref())?;
    init_logging(&logging).context("failed to initialize logging")?;
    info!(
        "event=app_start module=cli status=ok version={} catalog={}",
        core_version(),
        cli.catalog.display()
    );

    let config = SearchConfig::default()
        .with_match_policy(cli.match_policy)
        .with_empty_selection(cli.empty)
        .with_link_prefix(&cli.link_prefix);
    let mut search = ArticleSearch::new(config);

    if let Err(err) = search.load_from(&JsonFileSource::new(&cli.catalog)) {
        return Ok(report(&err));
    }

    if cli.list_tags {
        let tags = search.available_tags()?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&tags)?);
        } else {
            tags.iter().for_each(|tag| println!("{tag}"));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let selection = TagSelection::new(cli.tags);
    match search.search(&selection) {
        Ok(views) if cli.json => println!("{}", serde_json::to_string_pretty(&views)?),
        Ok(views) => print_views(&views),
        Err(err) => return Ok(report(&err)),
    }
    Ok(ExitCode::SUCCESS)
}

fn report(err: &SearchError) -> ExitCode {
    match err.notice() {
        Some(notice) => eprintln!("{notice}"),
        None => eprintln!("{err}"),
    }
    ExitCode::FAILURE
}

fn print_views(views: &[ArticleView]) {
    if views.is_empty() {
        println!("No matching articles.");
        return;
    }
    for view in views {
        println!("{}  {}", view.date, view.title);
        println!("    {}", view.link);
        if !view.description.is_empty() {
            println!("    {}", view.description);
        }
        println!("    [{}]", view.tags.join(", "));
    }
}
