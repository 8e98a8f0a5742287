//! Scraper for the upstream listings README (markdown with embedded HTML tables).

use crate::models::Listing;
use regex::Regex;
use std::sync::LazyLock;

static ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<tr>(.*?)</tr>").expect("valid row regex"));
static CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<td[^>]*>(.*?)</td>").expect("valid cell regex"));
static ANCHOR_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a[^>]*>([^<]+)</a>").expect("valid anchor regex"));
static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a[^>]*href="([^"]+)""#).expect("valid href regex"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));

const CLOSED_MARK: &str = "🔒";
const CONTINUATION_MARK: &str = "↳";

/// Extract the body of the section starting at `heading`, up to the next `## ` heading.
pub fn find_section<'a>(doc: &'a str, heading: &str) -> Option<&'a str> {
    let start = doc.find(heading)?;
    let rest = &doc[start + heading.len()..];
    let end = rest.find("\n## ").unwrap_or(rest.len());
    Some(&doc[start..start + heading.len() + end])
}

/// Parse the listings of the given section.
///
/// Closed positions and continuation rows are skipped, as are rows
/// lacking a company or a role.
pub fn parse_section(section: &str) -> Vec<Listing> {
    let mut out = Vec::new();

    for row in ROW_RE.captures_iter(section) {
        let row = &row[1];

        if row.contains(CLOSED_MARK) || is_continuation(row) {
            continue;
        }

        let cells: Vec<&str> = CELL_RE
            .captures_iter(row)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();
        if cells.len() < 5 {
            continue;
        }

        let company = ANCHOR_TEXT_RE
            .captures(cells[0])
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default();
        let role = strip_tags(cells[1]);
        let location = strip_tags(cells[2]);
        let apply_link = HREF_RE
            .captures(cells[3])
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default();

        if company.is_empty() || role.is_empty() {
            continue;
        }
        out.push(Listing::new(company, role, location, apply_link));
    }

    out
}

/// Parse a whole upstream document. `None` when the section is missing.
pub fn parse_document(doc: &str, heading: &str) -> Option<Vec<Listing>> {
    find_section(doc, heading).map(parse_section)
}

fn is_continuation(row: &str) -> bool {
    row.contains(&format!(">{CONTINUATION_MARK}<"))
        || row.contains(&format!("<td>{CONTINUATION_MARK}</td>"))
}

fn strip_tags(cell: &str) -> String {
    TAG_RE.replace_all(cell, "").trim().to_string()
}
