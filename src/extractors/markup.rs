// src/extractors/markup.rs
//
// Narrow view of an HTML tree: parse once, select nodes by CSS anchor,
// read the text beneath an anchor. Extractors are written against these
// traits so they can be driven by something other than `scraper` in tests.

use scraper::{ElementRef, Html, Selector};

use crate::utils::error::ExtractError;

/// Parses raw markup into a queryable document.
pub trait MarkupParser {
    type Document: MarkupDocument;

    fn parse(&self, raw: &str) -> Self::Document;
}

pub trait MarkupDocument {
    type Node<'a>: MarkupNode
    where
        Self: 'a;

    /// All nodes matching `anchor`, in document order.
    fn select_all<'a>(&'a self, anchor: &str) -> Result<Vec<Self::Node<'a>>, ExtractError>;
}

pub trait MarkupNode {
    /// Concatenated text of every descendant matching `anchor`.
    /// Empty when nothing matches.
    fn text_within(&self, anchor: &str) -> Result<String, ExtractError>;
}

/// `scraper`/html5ever backed parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlParser;

impl MarkupParser for HtmlParser {
    type Document = Html;

    fn parse(&self, raw: &str) -> Html {
        Html::parse_document(raw)
    }
}

fn compile(anchor: &str) -> Result<Selector, ExtractError> {
    Selector::parse(anchor)
        .map_err(|e| ExtractError::HtmlParseError(format!("invalid selector '{}': {:?}", anchor, e)))
}

impl MarkupDocument for Html {
    type Node<'a> = ElementRef<'a>;

    fn select_all<'a>(&'a self, anchor: &str) -> Result<Vec<ElementRef<'a>>, ExtractError> {
        let selector = compile(anchor)?;
        Ok(self.select(&selector).collect())
    }
}

impl MarkupNode for ElementRef<'_> {
    fn text_within(&self, anchor: &str) -> Result<String, ExtractError> {
        let selector = compile(anchor)?;
        Ok(self
            .select(&selector)
            .flat_map(|el| el.text())
            .collect::<String>())
    }
}
