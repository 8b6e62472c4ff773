// src/extractors/mod.rs
pub mod disclosure;
pub mod markup;

pub use disclosure::DisclosureExtractor;
