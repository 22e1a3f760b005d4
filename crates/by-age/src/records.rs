//! Reading timestamped records and applying the age window to them.

use std::io::BufRead;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use timeago::sort_by_age;
use tracing::{debug, warn};

use crate::config::FilterConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The input line, unchanged.
    pub line: String,
    pub created_at: DateTime<FixedOffset>,
}

/// The records that passed the filter, in output order.
#[derive(Debug, Default)]
pub struct Filtered {
    pub header: Option<String>,
    pub records: Vec<Record>,
    /// Lines that were dropped because they carried no valid timestamp.
    pub skipped: usize,
}

/// Read records from `reader`, keep those inside the configured window and
/// sort them by age.
pub fn filter_records<R: BufRead>(reader: R, config: &FilterConfig) -> Result<Filtered> {
    let mut filtered = Filtered::default();
    let mut total = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Reading line {}", index + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let created_at = match creation_timestamp(&line, config.field) {
            Some(created_at) => created_at,
            None if index == 0 => {
                debug!(header = %line, "treating first line as header");
                filtered.header = Some(line);
                continue;
            }
            None => {
                warn!(
                    line = index + 1,
                    field = config.field + 1,
                    "skipping record without an RFC 3339 timestamp"
                );
                filtered.skipped += 1;
                continue;
            }
        };

        total += 1;
        if config.bounds.contains(&created_at) {
            filtered.records.push(Record { line, created_at });
        }
    }

    sort_by_age(&mut filtered.records, |record| record.created_at, config.order);
    debug!(
        kept = filtered.records.len(),
        total,
        skipped = filtered.skipped,
        "filtered records"
    );
    Ok(filtered)
}

fn creation_timestamp(line: &str, field: usize) -> Option<DateTime<FixedOffset>> {
    let raw = line.split_whitespace().nth(field)?;
    DateTime::parse_from_rfc3339(raw).ok()
}
