//! Streaming dump conversion.
//!
//! Elements are tracked the way the dump is laid out: text inside `<title>`
//! accumulates the page title, text inside `<text>` the wiki markup. Closing
//! `</title>` numbers the page and writes its row; closing `</text>` writes
//! the links of the current page. Any other element resets the position.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::extract::extract_links;
use crate::sql::{EPILOGUE, PREAMBLE, link_insert, page_insert};

const PROGRESS_EVERY: u64 = 100_000;

/// Rows written by a conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DumpStats {
    /// Page rows (one per `<title>`).
    pub pages: u64,
    /// Link rows.
    pub links: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    Other,
    Title,
    Text,
}

struct LinkDumper<W> {
    out: W,
    position: Position,
    title: String,
    text: String,
    stats: DumpStats,
}

impl<W: Write> LinkDumper<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            position: Position::Other,
            title: String::new(),
            text: String::new(),
            stats: DumpStats::default(),
        }
    }

    fn write_statements(&mut self, statements: &[&str]) -> Result<()> {
        for statement in statements {
            writeln!(self.out, "{statement}")?;
        }
        Ok(())
    }

    fn start(&mut self, name: &[u8]) {
        self.position = match name {
            b"title" => Position::Title,
            b"text" => Position::Text,
            _ => Position::Other,
        };
    }

    fn end(&mut self, name: &[u8]) -> Result<()> {
        match name {
            b"title" => {
                self.stats.pages += 1;
                let title = self.title.trim_matches(|c: char| c <= ' ');
                writeln!(self.out, "{}", page_insert(self.stats.pages, title))?;
                self.title.clear();
                if self.stats.pages % PROGRESS_EVERY == 0 {
                    debug!(pages = self.stats.pages, links = self.stats.links, "dump progress");
                }
            }
            b"text" => {
                for link in extract_links(&self.text) {
                    writeln!(self.out, "{}", link_insert(self.stats.pages, &link))?;
                    self.stats.links += 1;
                }
                self.text.clear();
            }
            _ => self.position = Position::Other,
        }
        Ok(())
    }

    fn characters(&mut self, chunk: &str) {
        match self.position {
            Position::Title => self.title.push_str(chunk),
            Position::Text => self.text.push_str(chunk),
            Position::Other => {}
        }
    }
}

/// Convert the dump read from `input` into a MySQL script written to `out`.
///
/// Malformed XML aborts the conversion; statements written so far stay in
/// `out`.
pub fn dump_links<R: BufRead, W: Write>(input: R, out: W) -> Result<DumpStats> {
    let mut reader = Reader::from_reader(input);
    let mut dumper = LinkDumper::new(out);
    let mut buf = Vec::new();

    dumper.write_statements(PREAMBLE)?;
    loop {
        let event = match reader.read_event_into(&mut buf) {
            Ok(event) => event,
            Err(e) => {
                warn!(position = reader.buffer_position(), error = %e, "malformed wiki dump");
                return Err(e.into());
            }
        };
        match event {
            Event::Start(e) => dumper.start(e.name().as_ref()),
            Event::End(e) => dumper.end(e.name().as_ref())?,
            Event::Empty(e) => {
                let name = e.name();
                dumper.start(name.as_ref());
                dumper.end(name.as_ref())?;
            }
            Event::Text(e) => dumper.characters(&e.unescape()?),
            Event::CData(e) => dumper.characters(&String::from_utf8_lossy(&e)),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    dumper.write_statements(EPILOGUE)?;
    dumper.out.flush()?;

    let stats = dumper.stats;
    info!(pages = stats.pages, links = stats.links, "wiki dump converted");
    Ok(stats)
}

/// Convert the dump file at `path`.
pub fn dump_file<W: Write>(path: &Path, out: W) -> Result<DumpStats> {
    debug!(?path, "reading wiki dump");
    let file = File::open(path)?;
    dump_links(BufReader::new(file), out)
}
