use crate::models::Listing;
use reqwest::Url;

pub const TABLE_HEADER: &str = "| Company | Role | Location | Apply |\n|---------|------|----------|-------|\n";

/// Shown instead of an empty table.
pub const EMPTY_PLACEHOLDER: &str = "*There are no job listings available yet.*\n";

/// Rendered in the Apply column when the sheet has no link.
pub const NO_LINK: &str = "—";

/// Render listings as a markdown table, or the placeholder when there are none.
pub fn render_table(listings: &[Listing]) -> String {
    if listings.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let mut out = String::from(TABLE_HEADER);
    for listing in listings {
        out.push_str(&render_row(listing));
    }
    out
}

pub fn render_row(listing: &Listing) -> String {
    format!(
        "| {} | {} | {} | {} |\n",
        escape_cell(&listing.company),
        escape_cell(&listing.role),
        escape_cell(&listing.location),
        apply_cell(&listing.apply_link)
    )
}

/// Apply column: a link for well-formed URLs, plain text otherwise, a dash when empty.
pub fn apply_cell(link: &str) -> String {
    let link = link.trim();
    if link.is_empty() {
        NO_LINK.to_string()
    } else if is_linkable(link) {
        format!(r#"<a href="{link}" target="_blank">Apply</a>"#)
    } else {
        escape_cell(link)
    }
}

/// Absolute http(s) URL that can go verbatim into an `href="…"` attribute.
pub fn is_linkable(link: &str) -> bool {
    if link
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '<' | '>' | '|'))
    {
        return false;
    }
    match Url::parse(link) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

/// Keep a value inside its table cell: escape pipes and angle brackets,
/// fold line breaks and whitespace runs into a single space.
pub fn escape_cell(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut last_space = false;
    for ch in value.trim().chars() {
        if ch.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
            continue;
        }
        match ch {
            '|' => out.push_str("\\|"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
        last_space = false;
    }
    out
}
