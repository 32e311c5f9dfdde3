//! # openthesaurus
//!
//! Site binary: serves the news archive, renders it to stdout, and converts
//! Wikipedia dumps into the link tables.

#![deny(unsafe_code)]

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ot_core::NewsArchive;
use ot_core::logging::{LogFormat, init_subscriber};
use ot_settings::{LoggingSettings, NewsSettings, OtSettings};
use ot_web::{AnonymousSessions, NewsArchivePage, NewsServer, ServerConfig};
use ot_wikilinks::DumpStats;

/// OpenThesaurus site tools.
#[derive(Parser, Debug)]
#[command(name = "openthesaurus", about = "OpenThesaurus news archive site", version)]
struct Cli {
    /// Settings file (default `~/.openthesaurus/settings.json`).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the news archive over HTTP.
    Serve {
        /// Host to bind (overrides settings).
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, 0 for auto-assign (overrides settings).
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the news archive page to stdout.
    Render,
    /// Convert a Wikipedia XML dump into a MySQL script on stdout.
    WikiLinks {
        /// Path to the unpacked `XXwiki-YYYYMMDD-pages-articles.xml`.
        dump: PathBuf,
    },
}

fn load_settings(path: Option<&Path>) -> Result<OtSettings> {
    let path = path.map_or_else(ot_settings::settings_path, Path::to_path_buf);
    ot_settings::load_settings_from_path(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))
}

fn init_logging(logging: &LoggingSettings) {
    let format = if logging.json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    init_subscriber(&logging.level, format);
}

fn load_archive(news: &NewsSettings) -> Result<NewsArchive> {
    match &news.archive_path {
        Some(path) => NewsArchive::from_path(Path::new(path))
            .with_context(|| format!("Failed to load news archive from {path}")),
        None => Ok(NewsArchive::builtin()),
    }
}

fn build_page(settings: &OtSettings) -> Result<NewsArchivePage> {
    let archive = load_archive(&settings.news)?;
    tracing::info!(
        years = archive.groups().len(),
        entries = archive.entry_count(),
        "news archive loaded"
    );
    Ok(NewsArchivePage::from_settings(
        settings,
        Arc::new(archive),
        Arc::new(AnonymousSessions::new()),
    ))
}

fn server_config(settings: &OtSettings, host: Option<String>, port: Option<u16>) -> ServerConfig {
    let mut config = ServerConfig::from(&settings.server);
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config
}

async fn serve(settings: &OtSettings, host: Option<String>, port: Option<u16>) -> Result<()> {
    let page = build_page(settings)?;
    let mut server = NewsServer::new(server_config(settings, host, port), page);

    if settings.server.metrics_enabled {
        match ot_web::metrics::install_recorder() {
            Ok(handle) => server = server.with_metrics(handle),
            Err(e) => tracing::warn!(error = %e, "metrics disabled"),
        }
    }

    let handle = server.start().await.context("Failed to bind server")?;
    tracing::info!("OpenThesaurus listening on http://{}", handle.local_addr());

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl-c")?;

    tracing::info!("Shutting down...");
    if !handle.shutdown().await {
        tracing::warn!("news archive server did not drain before the timeout");
    }
    tracing::info!("Shutdown complete");
    Ok(())
}

fn render(settings: &OtSettings, out: &mut impl Write) -> Result<()> {
    let html = build_page(settings)?
        .render()
        .context("Failed to render news archive")?;
    out.write_all(html.as_bytes())
        .context("Failed to write page")?;
    out.flush().context("Failed to write page")
}

fn wiki_links(dump: &Path, out: impl Write) -> Result<DumpStats> {
    ot_wikilinks::dump_file(dump, out)
        .with_context(|| format!("Failed to convert wiki dump {}", dump.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.settings.as_deref())?;
    init_logging(&settings.logging);

    match cli.command {
        Command::Serve { host, port } => serve(&settings, host, port).await,
        Command::Render => render(&settings, &mut io::stdout().lock()),
        Command::WikiLinks { dump } => {
            let _stats = wiki_links(&dump, BufWriter::new(io::stdout().lock()))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn cli_serve_overrides() {
        let cli = Cli::parse_from(["openthesaurus", "serve", "--port", "9000", "--host", "::1"]);
        match cli.command {
            Command::Serve { host, port } => {
                assert_eq!(host.as_deref(), Some("::1"));
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_settings_is_global() {
        let cli = Cli::parse_from(["openthesaurus", "render", "--settings", "/etc/ot.json"]);
        assert_eq!(cli.settings, Some(PathBuf::from("/etc/ot.json")));
        assert!(matches!(cli.command, Command::Render));
    }

    #[test]
    fn cli_wiki_links_requires_dump() {
        assert!(Cli::try_parse_from(["openthesaurus", "wiki-links"]).is_err());
        let cli = Cli::parse_from(["openthesaurus", "wiki-links", "dewiki.xml"]);
        assert!(matches!(
            cli.command,
            Command::WikiLinks { dump } if dump == Path::new("dewiki.xml")
        ));
    }

    #[test]
    fn server_config_prefers_cli() {
        let settings = OtSettings::default();
        let config = server_config(&settings, None, Some(0));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 0);

        let config = server_config(&settings, Some("127.0.0.1".into()), None);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn missing_settings_file_uses_defaults() {
        let settings = load_settings(Some(Path::new("/nonexistent/settings.json"))).unwrap();
        assert_eq!(settings.site.name, "OpenThesaurus");
    }

    #[test]
    fn invalid_settings_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "settings.json", "{");
        let err = load_settings(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to load settings"));
    }

    #[test]
    fn builtin_archive_by_default() {
        let archive = load_archive(&NewsSettings::default()).unwrap();
        assert_eq!(archive, NewsArchive::builtin());
    }

    #[test]
    fn archive_from_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"{"groups": [{"year": 2010, "entries": [
            {"date": "2010-05-01", "body": {"html": "Neue <b>Suche</b>"}}
        ]}]}"#;
        let path = write_file(&dir, "news.json", json);
        let news = NewsSettings {
            archive_path: Some(path.to_string_lossy().into_owned()),
        };

        let archive = load_archive(&news).unwrap();
        assert_eq!(archive.years(), vec![2010]);
    }

    #[test]
    fn misordered_archive_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"{"groups": [
            {"year": 2003, "entries": [{"date": "2003-09-10", "body": {"html": "a"}}]},
            {"year": 2004, "entries": [{"date": "2004-01-06", "body": {"html": "b"}}]}
        ]}"#;
        let path = write_file(&dir, "news.json", json);
        let news = NewsSettings {
            archive_path: Some(path.to_string_lossy().into_owned()),
        };
        assert!(load_archive(&news).is_err());
    }

    #[test]
    fn render_writes_document() {
        let mut settings = OtSettings::default();
        settings.taxonomy.id = 77;
        let mut out = Vec::new();
        render(&settings, &mut out).unwrap();

        let html = String::from_utf8(out).unwrap();
        assert!(html.starts_with("<!DOCTYPE"));
        assert!(html.contains("<a href=\"synset.php?id=77\">Begriff</a>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn wiki_links_writes_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "dump.xml",
            "<mediawiki><page><title>Haus</title><text>[[Dach]]</text></page></mediawiki>",
        );
        let mut out = Vec::new();
        let stats = wiki_links(&path, &mut out).unwrap();
        assert_eq!((stats.pages, stats.links), (1, 1));
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("VALUES (1, 'Dach');"));
    }

    #[test]
    fn wiki_links_missing_dump_is_error() {
        let err = wiki_links(Path::new("/nonexistent/dump.xml"), io::sink()).unwrap_err();
        assert!(err.to_string().contains("Failed to convert wiki dump"));
    }
}
