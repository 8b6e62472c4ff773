// src/tdnet/listing.rs
use crate::extractors::disclosure::DisclosureExtractor;
use crate::extractors::markup::MarkupParser;
use crate::tdnet::client::{FetchOutcome, PageSource};
use crate::tdnet::date::DisclosureDate;
use crate::tdnet::models::{list_page_url, page_label, Disclosure};
use crate::utils::error::FetchError;

/// Upper bound on pages requested for one day, whatever the server says.
pub const MAX_PAGES: u32 = 100;

/// Why collection stopped. None of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The page returned 404; the list ended on the page before.
    NotFound { page: u32 },
    /// The page exists but has no disclosure rows.
    EmptyPage { page: u32 },
    /// All `MAX_PAGES` pages returned rows.
    PageLimit,
}

/// Everything collected for one day.
#[derive(Debug)]
pub struct Listing {
    pub disclosures: Vec<Disclosure>,
    pub pages_fetched: u32,
    pub stop: StopReason,
}

/// Walks the numbered list pages for `date` in order, starting at 001,
/// and gathers every disclosure until a page is missing or empty.
///
/// Any fetch error other than 404 aborts the walk and is returned as-is.
pub async fn collect_disclosures<S, P>(
    source: &S,
    extractor: &DisclosureExtractor<P>,
    base_url: &str,
    date: &DisclosureDate,
) -> Result<Listing, FetchError>
where
    S: PageSource + ?Sized,
    P: MarkupParser,
{
    let mut disclosures = Vec::new();
    let mut pages_fetched = 0;

    for page in 1..=MAX_PAGES {
        let url = list_page_url(base_url, page, date);
        tracing::info!("Fetching page {}: {}", page_label(page), url);

        let outcome = source.fetch_page(&url).await?;
        pages_fetched += 1;

        let body = match outcome {
            FetchOutcome::Page(body) => body,
            FetchOutcome::NotFound => {
                tracing::info!("Page {} not found; end of list", page_label(page));
                return Ok(Listing {
                    disclosures,
                    pages_fetched,
                    stop: StopReason::NotFound { page },
                });
            }
        };

        let page_disclosures = extractor.extract(&body);
        if page_disclosures.is_empty() {
            tracing::info!("Page {} has no disclosures; end of list", page_label(page));
            return Ok(Listing {
                disclosures,
                pages_fetched,
                stop: StopReason::EmptyPage { page },
            });
        }

        tracing::debug!(
            "Page {} yielded {} disclosures",
            page_label(page),
            page_disclosures.len()
        );
        disclosures.extend(page_disclosures);
    }

    tracing::warn!("Stopped after {} pages without reaching the end of the list", MAX_PAGES);
    Ok(Listing {
        disclosures,
        pages_fetched,
        stop: StopReason::PageLimit,
    })
}
