use crate::models::Listing;
use std::collections::HashSet;

/// Sheet listings first, in order and untouched; upstream listings follow,
/// minus any whose (company, role) was already seen.
pub fn merge_listings(sheet: Vec<Listing>, upstream: Vec<Listing>) -> Vec<Listing> {
    let mut seen: HashSet<(String, String)> = sheet.iter().map(Listing::key).collect();
    let mut merged = sheet;

    for listing in upstream {
        if seen.insert(listing.key()) {
            merged.push(listing);
        }
    }
    merged
}
