use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

use super::CommitRecord;

/// Inclusive calendar range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A generated report ready for publishing.
///
/// Owned by the caller; publishing only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub date_range: DateRange,
    /// Markdown body.
    pub content: String,
    pub total_commits: Option<usize>,
    pub projects: Vec<String>,
    pub branches: Vec<String>,
    pub created_at: NaiveDateTime,
}

impl Report {
    /// Builds a report whose counters summarize `commits`.
    ///
    /// Project and branch names are de-duplicated and sorted.
    pub fn from_commits(
        date_range: DateRange,
        content: impl Into<String>,
        commits: &[CommitRecord],
        created_at: NaiveDateTime,
    ) -> Self {
        let projects: BTreeSet<&str> = commits.iter().map(|c| c.project.as_str()).collect();
        let branches: BTreeSet<&str> = commits.iter().map(|c| c.branch.as_str()).collect();

        Self {
            date_range,
            content: content.into(),
            total_commits: Some(commits.len()),
            projects: projects.into_iter().map(str::to_string).collect(),
            branches: branches.into_iter().map(str::to_string).collect(),
            created_at,
        }
    }
}
