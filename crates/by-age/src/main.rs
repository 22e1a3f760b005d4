use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod cli;
mod config;
mod explain;
mod records;

use cli::Cli;
use config::FilterConfig;
use explain::Explanation;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = FilterConfig::from_cli(&cli)?;
    tracing::debug!(
        now = %config.now,
        newest = %config.bounds.newest,
        oldest = ?config.bounds.oldest.as_ref().map(|dt| dt.to_rfc3339()),
        "resolved age window"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.explain {
        let explanation = Explanation::new(&config)?;
        serde_json::to_writer_pretty(&mut out, &explanation)?;
        writeln!(out)?;
        return Ok(());
    }

    let filtered = records::filter_records(io::stdin().lock(), &config)?;
    if let Some(header) = &filtered.header {
        writeln!(out, "{header}").context("Writing output")?;
    }
    for record in &filtered.records {
        writeln!(out, "{}", record.line).context("Writing output")?;
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let max_level = if verbose { Level::DEBUG } else { Level::WARN };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(filter_fn(move |metadata| *metadata.level() <= max_level));

    tracing_subscriber::registry().with(fmt_layer).init();
}
