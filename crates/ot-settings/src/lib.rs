//! # ot-settings
//!
//! Configuration management with layered sources for the OpenThesaurus site.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`OtSettings::default()`]
//! 2. **User file**: `~/.openthesaurus/settings.json` (laid over defaults section by section)
//! 3. **Environment variables**: `OT_*` overrides (highest priority)
//!
//! The loaded value is validated once and then passed around immutably;
//! there is no global settings cache.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    load_settings, load_settings_from_path, load_settings_with_env, overlay, settings_path,
};
pub use types::*;
