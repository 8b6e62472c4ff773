// src/utils/error.rs
use thiserror::Error;

/// Failures while fetching a listing page. Any of these aborts the run.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to get data: network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("Failed to get data: HTTP {status} for {url}")]
    Http {
        status: reqwest::StatusCode, // anything but 2xx and 404
        url: String,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
}

// Never leaves the extractor: a page that fails here is treated as empty.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("HTML parsing error: {0}")]
    HtmlParseError(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid date format: '{0}'. Please enter a date in YYYY-MM-DD format (e.g. 2024-01-05).")]
    InvalidDateFormat(String),

    #[error("{0}")]
    FetchFailure(#[from] FetchError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
