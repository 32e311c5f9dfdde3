//! # ot-web
//!
//! The news archive page and the HTTP front serving it.
//!
//! - **Page**: [`NewsArchivePage`] renders the archive inside a page session,
//!   surrounded by the shared chrome fragments
//! - **Collaborators**: [`SessionFramework`] and [`PageChrome`] traits with the
//!   [`AnonymousSessions`] and [`StandardChrome`] implementations
//! - **Server**: Axum router (`/news_archive.php`, `/news/archive`, `/health`,
//!   `/metrics`) with graceful shutdown via `CancellationToken`

#![deny(unsafe_code)]

pub mod chrome;
pub mod config;
pub mod errors;
pub mod health;
pub mod metrics;
pub mod page;
pub mod render;
pub mod server;
pub mod session;

pub use chrome::{PageChrome, StandardChrome};
pub use config::ServerConfig;
pub use errors::PageError;
pub use page::{NEWS_ARCHIVE_SPEC, NewsArchivePage};
pub use render::render_archive_table;
pub use server::{AppState, NewsServer, ServerHandle};
pub use session::{AnonymousSessions, PageSession, PageSpec, SessionContext, SessionFramework};
