//! README composition by template substitution.
//!
//! Only two things are touched: the `**Last updated:**` line and the region
//! between the listing markers. Everything else is copied through as-is.

use crate::errors::{AppError, AppResult};
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

pub const START_MARKER: &str = "<!-- LISTINGS:START -->";
pub const END_MARKER: &str = "<!-- LISTINGS:END -->";
pub const TIMESTAMP_PREFIX: &str = "**Last updated:**";

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\*\*Last updated:\*\*[^\r\n]*").expect("valid timestamp regex")
});

/// Skeleton used when the README does not exist yet.
pub fn default_template() -> String {
    format!(
        "# Hardware Internships\n\
         \n\
         A curated list of hardware engineering internships.\n\
         \n\
         {TIMESTAMP_PREFIX} never\n\
         \n\
         ---\n\
         \n\
         ## Internships\n\
         \n\
         {START_MARKER}\n\
         {END_MARKER}\n"
    )
}

/// Substitute `timestamp` and the rendered `table` into `template`.
pub fn compose(template: &str, table: &str, timestamp: &str) -> AppResult<String> {
    let (start, end) = locate_region(template)?;

    let line = format!("{TIMESTAMP_PREFIX} {timestamp}");

    let mut out = String::with_capacity(template.len() + table.len() + line.len());
    // no timestamp line outside the listings: put one right above them
    let has_timestamp =
        TIMESTAMP_RE.is_match(&template[..start]) || TIMESTAMP_RE.is_match(&template[end..]);
    if !has_timestamp {
        out.push_str(&template[..start]);
        out.push_str(&line);
        out.push_str("\n\n");
        out.push_str(&template[start..start + START_MARKER.len()]);
    } else {
        out.push_str(&template[..start + START_MARKER.len()]);
    }
    out.push_str("\n\n");
    out.push_str(table);
    if !table.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&template[end..]);

    Ok(TIMESTAMP_RE.replace_all(&out, NoExpand(&line)).into_owned())
}

/// Byte offsets of the start marker and of the end marker that follows it.
fn locate_region(template: &str) -> AppResult<(usize, usize)> {
    let start = template.find(START_MARKER).ok_or_else(|| {
        AppError::Template(format!("README has no '{START_MARKER}' marker"))
    })?;
    let after = start + START_MARKER.len();
    let end = template[after..]
        .find(END_MARKER)
        .map(|i| after + i)
        .ok_or_else(|| {
            AppError::Template(format!("README has no '{END_MARKER}' after '{START_MARKER}'"))
        })?;
    Ok((start, end))
}
