// src/extractors/disclosure.rs

use crate::extractors::markup::{HtmlParser, MarkupDocument, MarkupNode, MarkupParser};
use crate::tdnet::models::Disclosure;
use crate::utils::error::ExtractError;

// --- Structural anchors of the daily list page ---
const ROW_ANCHOR: &str = "table#main-list-table > tbody > tr";
const TIME_ANCHOR: &str = "td.kjTime";
const CODE_ANCHOR: &str = "td.kjCode";
const NAME_ANCHOR: &str = "td.kjName";
const TITLE_ANCHOR: &str = "td.kjTitle > a";
const PLACE_ANCHOR: &str = "td.kjPlace";

/// The code cell may carry annotation after the four-character code.
const CODE_LEN: usize = 4;

/// Pulls disclosure rows out of a listing page.
pub struct DisclosureExtractor<P = HtmlParser> {
    parser: P,
}

impl DisclosureExtractor<HtmlParser> {
    pub fn new() -> Self {
        Self { parser: HtmlParser }
    }
}

impl Default for DisclosureExtractor<HtmlParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MarkupParser> DisclosureExtractor<P> {
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Returns the page's disclosures in row order.
    /// A page without the list table, or one that fails to parse, yields nothing.
    pub fn extract(&self, html: &str) -> Vec<Disclosure> {
        match self.try_extract(html) {
            Ok(disclosures) => disclosures,
            Err(e) => {
                tracing::warn!("Treating page as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn try_extract(&self, html: &str) -> Result<Vec<Disclosure>, ExtractError> {
        let document = self.parser.parse(html);
        let rows = document.select_all(ROW_ANCHOR)?;
        tracing::trace!("Found {} list rows", rows.len());

        rows.iter().map(read_row).collect()
    }
}

fn read_row<N: MarkupNode>(row: &N) -> Result<Disclosure, ExtractError> {
    let cell = |anchor: &str| -> Result<String, ExtractError> {
        Ok(row.text_within(anchor)?.trim().to_string())
    };

    Ok(Disclosure {
        time: cell(TIME_ANCHOR)?,
        code: cell(CODE_ANCHOR)?.chars().take(CODE_LEN).collect(),
        name: cell(NAME_ANCHOR)?,
        title: cell(TITLE_ANCHOR)?,
        place: cell(PLACE_ANCHOR)?,
    })
}
