//! Pure HTML rendering of the news archive table.

use std::fmt::Write as _;

use ot_core::{EntryBody, NewsArchive, NewsEntry};
use ot_settings::TaxonomyRoot;

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Link to the taxonomy root synset.
pub fn taxonomy_link(root: &TaxonomyRoot) -> String {
    format!(
        "<a href=\"synset.php?id={}\">{}</a>",
        root.id,
        escape_html(&root.name)
    )
}

/// Entry body HTML with the taxonomy root link filled in.
pub fn render_body(body: &EntryBody, root: &TaxonomyRoot) -> String {
    match body {
        EntryBody::Html(html) => html.clone(),
        EntryBody::WithTaxonomyRoot { before, after } => {
            format!("{before}{}{after}", taxonomy_link(root))
        }
    }
}

/// The archive as a table: a spacer row and year heading per group, then one
/// row per entry in authored order.
pub fn render_archive_table(archive: &NewsArchive, root: &TaxonomyRoot) -> String {
    let mut out = String::from("<table border=\"0\" cellpadding=\"5\" cellspacing=\"0\">\n");
    for group in archive.groups() {
        let _ = write!(
            out,
            "<tr><td>&nbsp;</td></tr>\n\
             <tr class=\"newsYearDelimiter\">\n\
             \t<td>{}</td>\n\
             \t<td></td>\n\
             </tr>\n",
            group.year
        );
        for entry in &group.entries {
            push_entry_row(&mut out, entry, root);
        }
    }
    out.push_str("</table>\n");
    out
}

fn push_entry_row(out: &mut String, entry: &NewsEntry, root: &TaxonomyRoot) {
    let _ = write!(
        out,
        "<tr>\n\
         \t<td valign=\"top\" align=\"right\" width=\"90\">\
         <span class=\"newsdate\">{}</span></td>\n\
         \t<td valign=\"top\">{}</td>\n\
         </tr>\n",
        escape_html(&entry.date.to_string()),
        render_body(&entry.body, root)
    );
}
