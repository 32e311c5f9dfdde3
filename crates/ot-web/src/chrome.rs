//! Shared page fragments: document head and header, footer, ad slots.

use std::collections::HashMap;

use ot_settings::SiteSettings;

use crate::errors::Result;
use crate::render::escape_html;

/// Ad slot rendered below the news archive table.
pub const NEWS_ARCHIVE_AD_SLOT: &str = "news_archive";

/// Produces the fragments every page shares.
pub trait PageChrome: Send + Sync {
    /// Document start through the page heading.
    fn top(&self, title: &str) -> Result<String>;

    /// Footer through document end.
    fn bottom(&self) -> Result<String>;

    /// Content of the named ad slot; empty when the slot is unused.
    fn ad_block(&self, slot: &str) -> Result<String>;
}

/// Fixed head, header and footer around the configured site name.
#[derive(Clone, Debug)]
pub struct StandardChrome {
    site_name: String,
    stylesheet: String,
    ads: HashMap<String, String>,
}

impl StandardChrome {
    /// Chrome without ads.
    pub fn new(site_name: impl Into<String>, stylesheet: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            stylesheet: stylesheet.into(),
            ads: HashMap::new(),
        }
    }

    /// Chrome configured from site settings.
    pub fn from_settings(site: &SiteSettings) -> Self {
        let mut chrome = Self::new(&site.name, &site.stylesheet);
        if let Some(html) = &site.news_archive_ad_html {
            chrome = chrome.with_ad(NEWS_ARCHIVE_AD_SLOT, html);
        }
        chrome
    }

    /// Fill an ad slot with trusted HTML.
    #[must_use]
    pub fn with_ad(mut self, slot: impl Into<String>, html: impl Into<String>) -> Self {
        let _ = self.ads.insert(slot.into(), html.into());
        self
    }
}

impl PageChrome for StandardChrome {
    fn top(&self, title: &str) -> Result<String> {
        let title = escape_html(title);
        let site = escape_html(&self.site_name);
        let stylesheet = escape_html(&self.stylesheet);
        Ok(format!(
            "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01 Transitional//EN\">\n\
             <html>\n\
             <head>\n\
             <meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n\
             <title>{title}</title>\n\
             <link rel=\"stylesheet\" type=\"text/css\" href=\"{stylesheet}\">\n\
             </head>\n\
             <body>\n\
             <div class=\"header\"><a href=\"./\">{site}</a></div>\n\
             <h1>{title}</h1>\n"
        ))
    }

    fn bottom(&self) -> Result<String> {
        Ok(format!(
            "<div class=\"footer\">{}</div>\n</body>\n</html>\n",
            escape_html(&self.site_name)
        ))
    }

    fn ad_block(&self, slot: &str) -> Result<String> {
        Ok(self
            .ads
            .get(slot)
            .map(|html| format!("<div class=\"textads\">{html}</div>\n"))
            .unwrap_or_default())
    }
}
