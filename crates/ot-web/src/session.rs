//! Page session contract.
//!
//! A page declares a [`PageSpec`] and opens a [`PageSession`] through a
//! [`SessionFramework`]. The guard hands the context back to the framework
//! exactly once: on [`PageSession::close`] or on drop, whichever comes first.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::{PageError, Result};
use crate::metrics::PAGE_SESSIONS_OPENED_TOTAL;

/// Session requirements a page declares before rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSpec {
    /// Session class name.
    pub session: &'static str,
    /// Auth mode name.
    pub auth: &'static str,
    /// Skip the login prompt and render for anonymous visitors.
    pub cancel_login: bool,
}

/// An open session/auth context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
    /// Unique session identifier.
    pub id: String,
    /// Session class the context was opened for.
    pub session: &'static str,
    /// Auth mode the context was opened for.
    pub auth: &'static str,
    /// Whether the visitor is anonymous.
    pub anonymous: bool,
}

/// Opens and closes per-request session contexts.
pub trait SessionFramework: Send + Sync {
    /// Open a context for `spec`.
    fn open(&self, spec: &PageSpec) -> Result<SessionContext>;

    /// Release a context returned by [`open`](Self::open).
    fn close(&self, context: SessionContext);
}

// ─────────────────────────────────────────────────────────────────────────────
// PageSession guard
// ─────────────────────────────────────────────────────────────────────────────

/// Scoped session context. Closes on drop if not closed explicitly.
pub struct PageSession<'a> {
    framework: &'a dyn SessionFramework,
    context: Option<SessionContext>,
}

impl<'a> PageSession<'a> {
    /// Open a context through `framework`.
    pub fn open(framework: &'a dyn SessionFramework, spec: &PageSpec) -> Result<Self> {
        let context = framework.open(spec)?;
        Ok(Self {
            framework,
            context: Some(context),
        })
    }

    /// The open context.
    pub fn context(&self) -> Option<&SessionContext> {
        self.context.as_ref()
    }

    /// Close the context now.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(context) = self.context.take() {
            self.framework.close(context);
        }
    }
}

impl Drop for PageSession<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AnonymousSessions
// ─────────────────────────────────────────────────────────────────────────────

/// Session framework for public pages: every visitor is anonymous.
///
/// Pages that do not cancel the login are refused with
/// [`PageError::LoginRequired`].
#[derive(Default)]
pub struct AnonymousSessions {
    open: Mutex<HashSet<String>>,
    opened: AtomicU64,
    closed: AtomicU64,
}

impl AnonymousSessions {
    /// Create an empty framework.
    pub fn new() -> Self {
        Self::default()
    }

    /// Contexts currently open.
    pub fn open_count(&self) -> usize {
        self.open.lock().len()
    }

    /// Contexts opened since creation.
    pub fn opened_total(&self) -> u64 {
        self.opened.load(Ordering::Relaxed)
    }

    /// Contexts closed since creation.
    pub fn closed_total(&self) -> u64 {
        self.closed.load(Ordering::Relaxed)
    }
}

impl SessionFramework for AnonymousSessions {
    fn open(&self, spec: &PageSpec) -> Result<SessionContext> {
        if !spec.cancel_login {
            return Err(PageError::LoginRequired(spec.auth.to_string()));
        }
        let context = SessionContext {
            id: Uuid::now_v7().to_string(),
            session: spec.session,
            auth: spec.auth,
            anonymous: true,
        };
        let _ = self.open.lock().insert(context.id.clone());
        let _ = self.opened.fetch_add(1, Ordering::Relaxed);
        ::metrics::counter!(PAGE_SESSIONS_OPENED_TOTAL).increment(1);
        debug!(session_id = %context.id, session = spec.session, "page session opened");
        Ok(context)
    }

    fn close(&self, context: SessionContext) {
        if self.open.lock().remove(&context.id) {
            let _ = self.closed.fetch_add(1, Ordering::Relaxed);
            debug!(session_id = %context.id, "page session closed");
        } else {
            warn!(session_id = %context.id, "closing unknown page session");
        }
    }
}
