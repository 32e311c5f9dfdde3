//! News archive data model.
//!
//! An archive is a list of [`YearGroup`]s, newest year first, each holding
//! dated [`NewsEntry`] rows in the order they are shown.
//! [`NewsArchive::validate`] checks that order for archives loaded from files.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "groups": [
//!     {
//!       "year": 2009,
//!       "entries": [
//!         { "date": "2009-02-20", "body": { "html": "Neuer Link" } },
//!         { "date": { "year": 2009, "month": 1, "label": "Januar 2009" },
//!           "body": { "withTaxonomyRoot": { "before": "Oberbegriff: ", "after": "." } } }
//!       ]
//!     }
//!   ]
//! }
//! ```

mod builtin;

use std::fmt;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ArchiveError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// NewsDate
// ─────────────────────────────────────────────────────────────────────────────

/// Display date of an entry.
///
/// Almost every entry carries an exact day. The oldest one only knows its
/// month and keeps its free-text label (`März 2003`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NewsDate {
    /// An exact day, shown as `YYYY-MM-DD`.
    Day(NaiveDate),
    /// A month with a free-text label.
    Month {
        /// Calendar year.
        year: i32,
        /// Month number (1-12), used for ordering only.
        month: u32,
        /// Text shown on the page.
        label: String,
    },
}

impl NewsDate {
    /// Calendar year of the date.
    pub fn year(&self) -> i32 {
        match self {
            Self::Day(date) => date.year(),
            Self::Month { year, .. } => *year,
        }
    }

    /// Ordering key. A month-only date sorts before every day of that month.
    pub fn sort_key(&self) -> (i32, u32, u32) {
        match self {
            Self::Day(date) => (date.year(), date.month(), date.day()),
            Self::Month { year, month, .. } => (*year, *month, 0),
        }
    }
}

impl fmt::Display for NewsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Month { label, .. } => f.write_str(label),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entries and groups
// ─────────────────────────────────────────────────────────────────────────────

/// Rich-text body of an entry.
///
/// Bodies are trusted HTML authored with the site; they are emitted verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryBody {
    /// Plain HTML fragment.
    Html(String),
    /// HTML split around a link to the configured taxonomy root synset.
    WithTaxonomyRoot {
        /// HTML before the link.
        before: String,
        /// HTML after the link.
        after: String,
    },
}

impl EntryBody {
    /// Whether the body links to the taxonomy root.
    pub fn links_taxonomy_root(&self) -> bool {
        matches!(self, Self::WithTaxonomyRoot { .. })
    }
}

/// One dated announcement row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsEntry {
    /// Display date.
    pub date: NewsDate,
    /// Rich-text body.
    pub body: EntryBody,
}

/// Entries sharing a year heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGroup {
    /// Heading year.
    pub year: i32,
    /// Entries, newest first.
    pub entries: Vec<NewsEntry>,
}

// ─────────────────────────────────────────────────────────────────────────────
// NewsArchive
// ─────────────────────────────────────────────────────────────────────────────

/// The complete archive, newest year first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArchive {
    groups: Vec<YearGroup>,
}

impl NewsArchive {
    /// Wrap groups without checking their order. See [`Self::validate`].
    pub fn new(groups: Vec<YearGroup>) -> Self {
        Self { groups }
    }

    /// The archive shipped with the site (2003 to 2009).
    pub fn builtin() -> Self {
        Self::new(builtin::groups())
    }

    /// Parse an archive from JSON and validate its ordering.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let archive: Self = serde_json::from_str(json)?;
        archive.validate()?;
        Ok(archive)
    }

    /// Load an archive file and validate its ordering.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(?path, "loading news archive");
        let content = std::fs::read_to_string(path)?;
        let archive = Self::from_json_str(&content)?;
        debug!(
            ?path,
            groups = archive.groups.len(),
            entries = archive.entry_count(),
            "news archive loaded"
        );
        Ok(archive)
    }

    /// Check the presentational ordering.
    ///
    /// - year groups strictly descending, none empty
    /// - every entry belongs to its group's year
    /// - month-only dates name a month in 1-12
    /// - entries within a group never newer than the entry above them
    pub fn validate(&self) -> Result<()> {
        let mut previous_year: Option<i32> = None;
        for group in &self.groups {
            if let Some(previous) = previous_year {
                if group.year >= previous {
                    return Err(ArchiveError::YearOrder {
                        previous,
                        year: group.year,
                    });
                }
            }
            if group.entries.is_empty() {
                return Err(ArchiveError::EmptyGroup(group.year));
            }

            let mut previous_entry: Option<&NewsEntry> = None;
            for entry in &group.entries {
                if let NewsDate::Month { month, label, .. } = &entry.date {
                    if !(1..=12).contains(month) {
                        return Err(ArchiveError::InvalidMonth {
                            date: label.clone(),
                            month: *month,
                        });
                    }
                }
                if entry.date.year() != group.year {
                    return Err(ArchiveError::YearMismatch {
                        year: group.year,
                        date: entry.date.to_string(),
                    });
                }
                if let Some(previous) = previous_entry {
                    if entry.date.sort_key() > previous.date.sort_key() {
                        return Err(ArchiveError::EntryOrder {
                            year: group.year,
                            previous: previous.date.to_string(),
                            date: entry.date.to_string(),
                        });
                    }
                }
                previous_entry = Some(entry);
            }
            previous_year = Some(group.year);
        }
        Ok(())
    }

    /// Year groups in display order.
    pub fn groups(&self) -> &[YearGroup] {
        &self.groups
    }

    /// Heading years in display order.
    pub fn years(&self) -> Vec<i32> {
        self.groups.iter().map(|g| g.year).collect()
    }

    /// Total number of entries.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// Entries whose body links to the taxonomy root.
    pub fn taxonomy_entries(&self) -> Vec<&NewsEntry> {
        self.groups
            .iter()
            .flat_map(|g| g.entries.iter())
            .filter(|e| e.body.links_taxonomy_root())
            .collect()
    }
}

impl Default for NewsArchive {
    fn default() -> Self {
        Self::builtin()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
