//! Article link extraction from wiki markup.

/// Links kept per page; extraction stops once this many are found.
pub const MAX_LINKS_PER_PAGE: usize = 15;

const SKIPPED_NAMESPACES: [&str; 3] = ["Bild:", "Kategorie:", "Image:"];

/// Extract article link targets from `[[...]]` markup, in order of appearance.
///
/// - `[[Ziel|Anzeige]]` keeps `Ziel`
/// - pure digit targets (years) are skipped
/// - image and category links are skipped, as are section-only `[[#...]]` links
/// - `[[Flugzeug#Flugsteuerung]]` keeps `Flugzeug`
/// - underscores become spaces
/// - anything still containing `:` (interwiki, namespaces) is skipped
pub fn extract_links(wiki_text: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut pos = 0;

    while let Some(start) = find_from(wiki_text, "[[", pos) {
        let Some(end) = find_from(wiki_text, "]]", start + 1) else {
            break;
        };
        let inner = &wiki_text[start + 2..end];
        pos = end;

        if let Some(link) = link_target(inner) {
            links.push(link);
            if links.len() >= MAX_LINKS_PER_PAGE {
                break;
            }
        }
    }
    links
}

fn link_target(inner: &str) -> Option<String> {
    let mut target = match split_non_trailing(inner, '|').as_slice() {
        [first, _] => *first,
        _ => inner,
    };
    if !target.is_empty() && target.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if SKIPPED_NAMESPACES.iter().any(|ns| target.starts_with(ns)) || target.starts_with('#') {
        return None;
    }
    if let [page, _] = split_non_trailing(target, '#').as_slice() {
        target = page;
    }
    let target = target.replace('_', " ");
    (!target.contains(':')).then_some(target)
}

/// Split on `sep`, dropping trailing empty pieces (`"a|"` is one piece).
fn split_non_trailing(text: &str, sep: char) -> Vec<&str> {
    let mut parts: Vec<&str> = text.split(sep).collect();
    while parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
        let _ = parts.pop();
    }
    parts
}

fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack
        .get(from..)
        .and_then(|rest| rest.find(needle))
        .map(|i| i + from)
}
