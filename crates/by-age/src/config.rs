//! Per-invocation filter configuration.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use timeago::{AgeBounds, AgeWindow, SortOrder};

use crate::cli::Cli;

/// Everything the filter needs, built once from the command line.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub window: AgeWindow,
    /// The reference instant, shared by both bounds.
    pub now: DateTime<Tz>,
    pub bounds: AgeBounds<Tz>,
    pub order: SortOrder,
    /// 0-based index of the timestamp field.
    pub field: usize,
}

impl FilterConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let timezone: Tz = cli
            .timezone
            .parse()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Invalid time zone '{}'", cli.timezone))?;

        let now = match &cli.now {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("Invalid --now timestamp '{raw}'"))?
                .with_timezone(&timezone),
            None => Utc::now().with_timezone(&timezone),
        };

        let window = AgeWindow {
            min_age: cli.min_age.clone(),
            max_age: cli.max_age.clone(),
        };
        let bounds = window.resolve(&now)?;

        let order = if cli.reverse_sort {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        };

        Ok(Self {
            window,
            now,
            bounds,
            order,
            field: cli.field as usize - 1,
        })
    }
}
