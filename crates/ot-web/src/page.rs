//! The news archive page controller.

use std::sync::Arc;

use ot_core::NewsArchive;
use ot_settings::{OtSettings, TaxonomyRoot};
use tracing::{debug, instrument};

use crate::chrome::{NEWS_ARCHIVE_AD_SLOT, PageChrome, StandardChrome};
use crate::errors::Result;
use crate::metrics::{PAGE_RENDER_ERRORS_TOTAL, PAGE_RENDERS_TOTAL};
use crate::render::render_archive_table;
use crate::session::{PageSession, PageSpec, SessionFramework};

/// Session requirements of the news archive: anonymous visitors allowed.
pub const NEWS_ARCHIVE_SPEC: PageSpec = PageSpec {
    session: "Thesaurus_Session",
    auth: "Thesaurus_Default_Auth",
    cancel_login: true,
};

const PAGE_NAME: &str = "news_archive";

/// Renders the news archive inside a page session.
///
/// Everything except the session framework is immutable, so rendering the
/// same page twice yields the same bytes.
pub struct NewsArchivePage {
    title: String,
    archive: Arc<NewsArchive>,
    taxonomy: TaxonomyRoot,
    sessions: Arc<dyn SessionFramework>,
    chrome: Arc<dyn PageChrome>,
}

impl NewsArchivePage {
    /// Assemble a page from its collaborators.
    pub fn new(
        title: impl Into<String>,
        archive: Arc<NewsArchive>,
        taxonomy: TaxonomyRoot,
        sessions: Arc<dyn SessionFramework>,
        chrome: Arc<dyn PageChrome>,
    ) -> Self {
        Self {
            title: title.into(),
            archive,
            taxonomy,
            sessions,
            chrome,
        }
    }

    /// Page with title, taxonomy root and [`StandardChrome`] taken from settings.
    pub fn from_settings(
        settings: &OtSettings,
        archive: Arc<NewsArchive>,
        sessions: Arc<dyn SessionFramework>,
    ) -> Self {
        Self::new(
            settings.site.news_archive_title.clone(),
            archive,
            settings.taxonomy.clone(),
            sessions,
            Arc::new(StandardChrome::from_settings(&settings.site)),
        )
    }

    /// The archive being rendered.
    pub fn archive(&self) -> &NewsArchive {
        &self.archive
    }

    /// Render the full HTML document.
    ///
    /// The session context is released before returning, on success and on
    /// every error path.
    #[instrument(skip_all, fields(page = PAGE_NAME))]
    pub fn render(&self) -> Result<String> {
        let result = self.render_in_session();
        match &result {
            Ok(html) => {
                ::metrics::counter!(PAGE_RENDERS_TOTAL, "page" => PAGE_NAME).increment(1);
                debug!(bytes = html.len(), "page rendered");
            }
            Err(_) => {
                ::metrics::counter!(PAGE_RENDER_ERRORS_TOTAL, "page" => PAGE_NAME).increment(1);
            }
        }
        result
    }

    fn render_in_session(&self) -> Result<String> {
        let session = PageSession::open(self.sessions.as_ref(), &NEWS_ARCHIVE_SPEC)?;
        let document = self.document();
        session.close();
        document
    }

    fn document(&self) -> Result<String> {
        let mut html = self.chrome.top(&self.title)?;
        html.push_str(&render_archive_table(&self.archive, &self.taxonomy));
        html.push_str(&self.chrome.ad_block(NEWS_ARCHIVE_AD_SLOT)?);
        html.push_str(&self.chrome.bottom()?);
        Ok(html)
    }
}
