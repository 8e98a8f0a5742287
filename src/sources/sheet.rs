//! Parsing of the published sheet CSV export.

use crate::errors::{AppError, AppResult};
use crate::models::Listing;
use csv::{ErrorKind, ReaderBuilder, StringRecord};

/// Expected header, in order. Compared trimmed and case-insensitively.
pub const EXPECTED_COLUMNS: [&str; 4] = ["Company", "Role", "Location", "Apply Link"];

/// Parse the CSV body into listings.
///
/// - header must be exactly `EXPECTED_COLUMNS`
/// - every data row must have as many fields as the header
/// - fully blank rows (sheet padding) are skipped
pub fn parse_listings(text: &str) -> AppResult<Vec<Listing>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers = rdr.headers().map_err(describe)?.clone();
    check_header(&headers)?;

    let mut listings = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(describe)?;
        let listing = to_listing(&record);
        if !listing.is_blank() {
            listings.push(listing);
        }
    }
    Ok(listings)
}

fn check_header(headers: &StringRecord) -> AppResult<()> {
    let found: Vec<&str> = headers.iter().map(str::trim).collect();

    let matches = found.len() == EXPECTED_COLUMNS.len()
        && found
            .iter()
            .zip(EXPECTED_COLUMNS.iter())
            .all(|(got, want)| got.eq_ignore_ascii_case(want));

    if matches {
        Ok(())
    } else {
        Err(AppError::Parse(format!(
            "unexpected header [{}], expected [{}]",
            found.join(", "),
            EXPECTED_COLUMNS.join(", ")
        )))
    }
}

fn to_listing(record: &StringRecord) -> Listing {
    let field = |i: usize| record.get(i).map(str::trim).unwrap_or("").to_string();
    Listing {
        company: field(0),
        role: field(1),
        location: field(2),
        apply_link: field(3),
    }
}

fn describe(e: csv::Error) -> AppError {
    if let ErrorKind::UnequalLengths {
        pos,
        expected_len,
        len,
    } = e.kind()
    {
        let line = pos.as_ref().map(|p| p.line()).unwrap_or(0);
        return AppError::Parse(format!(
            "line {line}: expected {expected_len} fields, found {len}"
        ));
    }
    AppError::from(e)
}
