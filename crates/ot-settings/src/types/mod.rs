//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase", default)]`: the JSON file
//! may be partial and missing fields keep their compiled default.

mod server;
mod site;

pub use server::*;
pub use site::*;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SettingsError};

/// Root settings type.
///
/// # JSON Format
///
/// ```json
/// {
///   "server": { "port": 8080 },
///   "taxonomy": { "id": 1, "name": "Begriff" },
///   "news": { "archivePath": "/srv/openthesaurus/news.json" }
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OtSettings {
    /// Settings schema version.
    pub version: String,
    /// HTTP listener settings.
    pub server: ServerSettings,
    /// Page titles and shared page fragments.
    pub site: SiteSettings,
    /// Root of the word hierarchy, linked from the news archive.
    pub taxonomy: TaxonomyRoot,
    /// Log output settings.
    pub logging: LoggingSettings,
    /// News archive source.
    pub news: NewsSettings,
}

impl Default for OtSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            server: ServerSettings::default(),
            site: SiteSettings::default(),
            taxonomy: TaxonomyRoot::default(),
            logging: LoggingSettings::default(),
            news: NewsSettings::default(),
        }
    }
}

impl OtSettings {
    /// Reject values the site cannot render with.
    pub fn validate(&self) -> Result<()> {
        if self.taxonomy.id == 0 {
            return Err(SettingsError::InvalidValue(
                "taxonomy.id must be positive".to_string(),
            ));
        }
        if self.taxonomy.name.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "taxonomy.name must not be empty".to_string(),
            ));
        }
        if self.site.news_archive_title.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "site.newsArchiveTitle must not be empty".to_string(),
            ));
        }
        if self.server.host.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "server.host must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
