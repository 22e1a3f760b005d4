//! Min-age / max-age filtering and ordering by age.
//!
//! Both bounds are resolved against one reference instant so that a
//! min-age and a max-age never see two different "now"s.

use std::cmp::Ordering;

use chrono::{DateTime, TimeZone};

use crate::error::WindowError;
use crate::parse_relative;

/// An unresolved age window, as given on a command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgeWindow {
    /// Items younger than this are dropped.
    pub min_age: Option<String>,
    /// Items older than this are dropped.
    pub max_age: Option<String>,
}

impl AgeWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_age(mut self, expression: impl Into<String>) -> Self {
        self.min_age = Some(expression.into());
        self
    }

    pub fn with_max_age(mut self, expression: impl Into<String>) -> Self {
        self.max_age = Some(expression.into());
        self
    }

    /// Resolve both expressions against `now`.
    ///
    /// Without a min-age the upper bound is `now` itself. Without a max-age
    /// there is no lower bound.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::MinAge`] or [`WindowError::MaxAge`] wrapping
    /// the parse failure of the corresponding expression.
    pub fn resolve<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> Result<AgeBounds<Tz>, WindowError> {
        let newest = match &self.min_age {
            Some(expr) => parse_relative(expr, now).map_err(WindowError::MinAge)?,
            None => now.clone(),
        };
        let oldest = self
            .max_age
            .as_deref()
            .map(|expr| parse_relative(expr, now).map_err(WindowError::MaxAge))
            .transpose()?;
        Ok(AgeBounds { newest, oldest })
    }
}

/// Creation-time bounds produced by [`AgeWindow::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct AgeBounds<Tz: TimeZone> {
    /// Items must have been created strictly before this instant.
    pub newest: DateTime<Tz>,
    /// If set, items must have been created strictly after this instant.
    pub oldest: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> AgeBounds<Tz> {
    /// Whether an item created at `created_at` falls inside the window.
    pub fn contains<Tz2: TimeZone>(&self, created_at: &DateTime<Tz2>) -> bool {
        *created_at < self.newest
            && self
                .oldest
                .as_ref()
                .is_none_or(|oldest| *created_at > *oldest)
    }
}

/// How [`sort_by_age`] orders items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Oldest first.
    #[default]
    Descending,
    /// Newest first.
    Ascending,
}

/// Sort items by the creation timestamp returned from `created_at`.
///
/// The sort is stable: items with equal timestamps keep their order.
pub fn sort_by_age<T, Tz, F>(items: &mut [T], mut created_at: F, order: SortOrder)
where
    Tz: TimeZone,
    F: FnMut(&T) -> DateTime<Tz>,
{
    items.sort_by(|a, b| {
        let by_creation: Ordering = created_at(a).cmp(&created_at(b));
        match order {
            SortOrder::Descending => by_creation,
            SortOrder::Ascending => by_creation.reverse(),
        }
    });
}

// ── Tests ───────────────────────────────────────────────────────────────────
