//! Site content settings: titles, shared fragments, taxonomy root, news source.

use serde::{Deserialize, Serialize};

/// Titles and shared page fragments.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    /// Site name shown in the header and footer.
    pub name: String,
    /// Title of the news archive page.
    pub news_archive_title: String,
    /// Stylesheet linked from every page.
    pub stylesheet: String,
    /// HTML inserted at the news archive ad slot. Empty slot when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news_archive_ad_html: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: "OpenThesaurus".to_string(),
            news_archive_title: "OpenThesaurus - News Archiv".to_string(),
            stylesheet: "default.css".to_string(),
            news_archive_ad_html: None,
        }
    }
}

/// Root synset of the word hierarchy (the most general noun).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxonomyRoot {
    /// Synset identifier.
    pub id: u64,
    /// Display name of the synset.
    pub name: String,
}

impl Default for TaxonomyRoot {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Begriff".to_string(),
        }
    }
}

/// Where the news archive content comes from.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsSettings {
    /// JSON archive file replacing the built-in archive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_path: Option<String>,
}
