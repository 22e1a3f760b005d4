//! `--explain`: show how the age expressions were decomposed and resolved.

use anyhow::Result;
use serde::Serialize;
use timeago::DurationExpression;

use crate::config::FilterConfig;

#[derive(Debug, Serialize)]
pub struct Explanation {
    pub now: String,
    pub timezone: String,
    pub min_age: Option<BoundExplanation>,
    pub max_age: Option<BoundExplanation>,
    /// Records must be created before this instant.
    pub created_before: String,
    /// Records must be created after this instant, if set.
    pub created_after: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BoundExplanation {
    pub expression: String,
    pub parsed: DurationExpression,
}

impl Explanation {
    pub fn new(config: &FilterConfig) -> Result<Self> {
        let explain = |expression: &Option<String>| -> Result<Option<BoundExplanation>> {
            expression
                .as_deref()
                .map(|expr| -> Result<BoundExplanation> {
                    Ok(BoundExplanation {
                        expression: expr.to_string(),
                        parsed: DurationExpression::parse(expr)?,
                    })
                })
                .transpose()
        };

        Ok(Self {
            now: config.now.to_rfc3339(),
            timezone: config.now.timezone().name().to_string(),
            min_age: explain(&config.window.min_age)?,
            max_age: explain(&config.window.max_age)?,
            created_before: config.bounds.newest.to_rfc3339(),
            created_after: config.bounds.oldest.as_ref().map(|dt| dt.to_rfc3339()),
        })
    }
}
