//! # ot-wikilinks
//!
//! Builds the Wikipedia link tables used by the thesaurus result pages.
//!
//! Reads a MediaWiki XML dump (`XXwiki-YYYYMMDD-pages-articles.xml`) as a
//! stream and writes a MySQL script with one row per page title and up to
//! [`MAX_LINKS_PER_PAGE`] article links per page. Link filtering is tuned
//! for the German Wikipedia (`Bild:`, `Kategorie:`).

#![deny(unsafe_code)]

pub mod dump;
pub mod errors;
pub mod extract;
pub mod sql;

pub use dump::{DumpStats, dump_file, dump_links};
pub use errors::DumpError;
pub use extract::{MAX_LINKS_PER_PAGE, extract_links};
pub use sql::escape_sql;
