//! # ot-core
//!
//! Foundation types for the OpenThesaurus site.
//!
//! - **News archive**: [`NewsArchive`] with year groups of dated entries and
//!   the built-in archive shipped with the site
//! - **Errors**: [`ArchiveError`] for ordering violations and load failures
//! - **Logging**: `tracing` subscriber setup and in-memory capture for tests

#![deny(unsafe_code)]

pub mod errors;
pub mod logging;
pub mod news;

pub use errors::ArchiveError;
pub use news::{EntryBody, NewsArchive, NewsDate, NewsEntry, YearGroup};
