// src/tdnet/models.rs
use serde::Serialize;

use crate::tdnet::date::DisclosureDate;

/// One row of the TDnet daily disclosure list.
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disclosure {
    pub time: String,  // As displayed, e.g. "15:00"
    pub code: String,  // First four characters of the code cell
    pub name: String,  // Company name
    pub title: String, // Disclosure headline
    pub place: String, // Exchange(s) the disclosure comes from
}

/// Three-digit, 1-based page label: 1 -> "001".
pub fn page_label(page: u32) -> String {
    format!("{:03}", page)
}

/// Builds the URL of one page of the daily list, e.g.
/// `https://www.release.tdnet.info/inbs/I_list_001_20240105.html`
pub fn list_page_url(base_url: &str, page: u32, date: &DisclosureDate) -> String {
    format!(
        "{}/inbs/I_list_{}_{}.html",
        base_url.trim_end_matches('/'),
        page_label(page),
        date.compact()
    )
}
