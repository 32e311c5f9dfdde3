//! Settings loading: defaults, then the user file, then `OT_*` variables.
//!
//! The user file only names the keys it changes, e.g.
//! `{"taxonomy": {"id": 42}}` keeps the default taxonomy name and every
//! other section. See [`overlay`] for how the file is laid over defaults.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::Result;
use crate::types::OtSettings;

const SETTINGS_DIR: &str = ".openthesaurus";
const SETTINGS_FILE: &str = "settings.json";

/// The settings file used when `--settings` is not given:
/// `$HOME/.openthesaurus/settings.json`, or `./.openthesaurus/settings.json`
/// when `HOME` is unset.
pub fn settings_path() -> PathBuf {
    settings_path_in(std::env::var_os("HOME").map(PathBuf::from))
}

fn settings_path_in(home: Option<PathBuf>) -> PathBuf {
    home.filter(|h| !h.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SETTINGS_DIR)
        .join(SETTINGS_FILE)
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<OtSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with process env var overrides.
///
/// A missing file yields defaults; invalid JSON is an error.
pub fn load_settings_from_path(path: &Path) -> Result<OtSettings> {
    load_settings_with_env(path, |name| std::env::var(name).ok())
}

/// Load settings from `path`, reading overrides through `env`.
pub fn load_settings_with_env<F>(path: &Path, env: F) -> Result<OtSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut doc = serde_json::to_value(OtSettings::default())?;

    if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        overlay(&mut doc, serde_json::from_str(&content)?);
    } else {
        debug!(?path, "settings file not found, using defaults");
    }

    let mut settings: OtSettings = serde_json::from_value(doc)?;
    apply_env_overrides(&mut settings, env);
    settings.validate()?;
    Ok(settings)
}

/// Lay a user settings document over `base` in place.
///
/// Sections (`server`, `site`, `taxonomy`, `logging`, `news`) are objects
/// and merge key by key, so `{"server": {"port": 9090}}` keeps the default
/// host. A `null` keeps whatever `base` holds. Any other value replaces the
/// base value outright.
pub fn overlay(base: &mut Value, user: Value) {
    match (base, user) {
        (_, Value::Null) => {}
        (Value::Object(section), Value::Object(user)) => {
            for (key, value) in user {
                if let Some(slot) = section.get_mut(&key) {
                    overlay(slot, value);
                } else if !value.is_null() {
                    let _ = section.insert(key, value);
                }
            }
        }
        (base, user) => *base = user,
    }
}

/// Apply `OT_*` overrides read through `env`.
///
/// Invalid values are logged and ignored (file/default value stays).
pub fn apply_env_overrides<F>(settings: &mut OtSettings, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let reader = EnvReader { env: &env };

    // ── Server ──────────────────────────────────────────────────────
    if let Some(v) = reader.string("OT_HOST") {
        settings.server.host = v;
    }
    if let Some(v) = reader.parsed("OT_PORT", |s| parse_u64_range(s, 0, 65_535)) {
        settings.server.port = u16::try_from(v).unwrap_or(settings.server.port);
    }
    if let Some(v) = reader.parsed("OT_METRICS", parse_bool) {
        settings.server.metrics_enabled = v;
    }

    // ── Taxonomy root ───────────────────────────────────────────────
    if let Some(v) = reader.parsed("OT_TOP_SYNSET_ID", |s| parse_u64_range(s, 1, u64::MAX)) {
        settings.taxonomy.id = v;
    }
    if let Some(v) = reader.string("OT_TOP_SYNSET_NAME") {
        settings.taxonomy.name = v;
    }

    // ── Logging ─────────────────────────────────────────────────────
    if let Some(v) = reader.string("OT_LOG_LEVEL") {
        settings.logging.level = v;
    }
    if let Some(v) = reader.parsed("OT_LOG_JSON", parse_bool) {
        settings.logging.json = v;
    }

    // ── News ────────────────────────────────────────────────────────
    if let Some(v) = reader.string("OT_NEWS_ARCHIVE") {
        settings.news.archive_path = Some(v);
    }
}

/// Parse a boolean: `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse an integer within `[min, max]`.
pub fn parse_u64_range(val: &str, min: u64, max: u64) -> Option<u64> {
    val.trim()
        .parse::<u64>()
        .ok()
        .filter(|v| (min..=max).contains(v))
}

// ── Env var readers ─────────────────────────────────────────────────────────

struct EnvReader<'a, F> {
    env: &'a F,
}

impl<F> EnvReader<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn string(&self, name: &str) -> Option<String> {
        (self.env)(name).filter(|v| !v.is_empty())
    }

    fn parsed<T>(&self, name: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        let val = (self.env)(name)?;
        let result = parse(&val);
        if result.is_none() {
            tracing::warn!(key = name, value = %val, "invalid env var, ignoring");
        }
        result
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::errors::SettingsError;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    // ── settings_path ───────────────────────────────────────────────

    #[test]
    fn path_under_home() {
        let path = settings_path_in(Some(PathBuf::from("/home/ot")));
        assert_eq!(path, Path::new("/home/ot/.openthesaurus/settings.json"));
    }

    #[test]
    fn path_without_home_is_relative() {
        assert_eq!(settings_path_in(None), Path::new("./.openthesaurus/settings.json"));
        assert_eq!(
            settings_path_in(Some(PathBuf::new())),
            Path::new("./.openthesaurus/settings.json")
        );
    }

    // ── overlay ─────────────────────────────────────────────────────

    fn defaults() -> Value {
        serde_json::to_value(OtSettings::default()).unwrap()
    }

    #[test]
    fn overlay_keeps_sibling_keys() {
        let mut doc = defaults();
        overlay(&mut doc, serde_json::json!({"server": {"port": 9090}}));
        assert_eq!(doc["server"]["port"], 9090);
        assert_eq!(doc["server"]["host"], "0.0.0.0");
        assert_eq!(doc["taxonomy"]["id"], 1);
    }

    #[test]
    fn overlay_null_keeps_default() {
        let mut doc = defaults();
        overlay(&mut doc, serde_json::json!({"taxonomy": {"name": null}, "site": null}));
        assert_eq!(doc, defaults());
    }

    #[test]
    fn overlay_scalar_replaces_section() {
        let mut doc = serde_json::json!({"news": {"archivePath": "/srv/a.json"}});
        overlay(&mut doc, serde_json::json!({"news": 42}));
        assert_eq!(doc["news"], 42);
    }

    #[test]
    fn overlay_adds_missing_key() {
        let mut doc = serde_json::json!({"news": {}});
        overlay(&mut doc, serde_json::json!({"news": {"archivePath": "/srv/a.json"}}));
        assert_eq!(doc["news"]["archivePath"], "/srv/a.json");
    }

    // ── load_settings_with_env ──────────────────────────────────────

    #[test]
    fn load_missing_file_returns_defaults() {
        let settings =
            load_settings_with_env(Path::new("/nonexistent/settings.json"), no_env).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.taxonomy, crate::TaxonomyRoot::default());
    }

    #[test]
    fn load_partial_json_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"server": {"port": 9090}, "taxonomy": {"id": 42, "name": "Entität"}}"#,
        )
        .unwrap();

        let settings = load_settings_with_env(&path, no_env).unwrap();
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.taxonomy.id, 42);
        assert_eq!(settings.taxonomy.name, "Entität");
    }

    #[test]
    fn load_invalid_json_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result = load_settings_with_env(&path, no_env);
        assert!(matches!(result.unwrap_err(), SettingsError::Json(_)));
    }

    #[test]
    fn load_rejects_empty_taxonomy_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"taxonomy": {"name": ""}}"#).unwrap();

        let result = load_settings_with_env(&path, no_env);
        assert!(matches!(result.unwrap_err(), SettingsError::InvalidValue(_)));
    }

    #[test]
    fn load_rejects_zero_taxonomy_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"taxonomy": {"id": 0}}"#).unwrap();

        let err = load_settings_with_env(&path, no_env).unwrap_err();
        assert!(err.to_string().contains("taxonomy.id"));
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"server": {"port": 9090}}"#).unwrap();

        let env = env_from(&[
            ("OT_PORT", "7000"),
            ("OT_HOST", "127.0.0.1"),
            ("OT_TOP_SYNSET_ID", "99"),
            ("OT_TOP_SYNSET_NAME", "Objekt"),
            ("OT_LOG_JSON", "yes"),
            ("OT_NEWS_ARCHIVE", "/srv/news.json"),
        ]);
        let settings = load_settings_with_env(&path, env).unwrap();
        assert_eq!(settings.server.port, 7000);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.taxonomy.id, 99);
        assert_eq!(settings.taxonomy.name, "Objekt");
        assert!(settings.logging.json);
        assert_eq!(settings.news.archive_path.as_deref(), Some("/srv/news.json"));
    }

    #[test]
    fn invalid_env_values_ignored() {
        let mut settings = OtSettings::default();
        let env = env_from(&[
            ("OT_PORT", "99999"),
            ("OT_TOP_SYNSET_ID", "0"),
            ("OT_LOG_JSON", "maybe"),
            ("OT_HOST", ""),
        ]);
        apply_env_overrides(&mut settings, env);
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.taxonomy.id, 1);
        assert!(!settings.logging.json);
        assert_eq!(settings.server.host, "0.0.0.0");
    }

    // ── parsers ─────────────────────────────────────────────────────

    #[test]
    fn parse_bool_variants() {
        for val in ["true", "1", "yes", "on", "TRUE", "On"] {
            assert_eq!(parse_bool(val), Some(true), "failed for {val}");
        }
        for val in ["false", "0", "no", "off", "NO"] {
            assert_eq!(parse_bool(val), Some(false), "failed for {val}");
        }
        assert_eq!(parse_bool("2"), None);
    }

    #[test]
    fn parse_u64_bounds() {
        assert_eq!(parse_u64_range("0", 0, 65_535), Some(0));
        assert_eq!(parse_u64_range("65535", 0, 65_535), Some(65_535));
        assert_eq!(parse_u64_range("65536", 0, 65_535), None);
        assert_eq!(parse_u64_range("abc", 0, 10), None);
    }
}
