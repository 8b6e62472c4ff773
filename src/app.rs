// src/app.rs
use std::path::PathBuf;
use std::time::Duration;

use crate::extractors::DisclosureExtractor;
use crate::storage::StorageManager;
use crate::tdnet::client::TdnetClient;
use crate::tdnet::date::parse_date_arg;
use crate::tdnet::listing::{collect_disclosures, StopReason};
use crate::utils::html_debug::DebugPageSource;
use crate::utils::AppError;

/// Settings for one scrape of one day.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Raw date argument; `None` means today.
    pub date: Option<String>,
    pub output_dir: PathBuf,
    pub base_url: String,
    pub request_delay: Duration,
    /// Keep raw page HTML under `<output_dir>/debug/<date>/`.
    pub debug: bool,
}

/// Scrapes the day's list and writes its CSV.
/// Returns the written path, or `None` when the day had no disclosures.
pub async fn run(config: &RunConfig) -> Result<Option<PathBuf>, AppError> {
    // Validate the date before any network activity.
    let date = parse_date_arg(config.date.as_deref())?;
    tracing::info!("Collecting TDnet disclosures for {}", date.dashed());

    let client = TdnetClient::new(config.request_delay)?;
    let extractor = DisclosureExtractor::new();

    let listing = if config.debug {
        let debug_dir = config.output_dir.join("debug").join(date.dashed());
        tracing::info!("Debug mode: raw pages go to {}", debug_dir.display());
        let source = DebugPageSource::new(&client, debug_dir);
        collect_disclosures(&source, &extractor, &config.base_url, &date).await?
    } else {
        collect_disclosures(&client, &extractor, &config.base_url, &date).await?
    };

    match listing.stop {
        StopReason::NotFound { page } => tracing::info!(
            "List ended at missing page {} ({} pages fetched)",
            page,
            listing.pages_fetched
        ),
        StopReason::EmptyPage { page } => tracing::info!(
            "List ended at empty page {} ({} pages fetched)",
            page,
            listing.pages_fetched
        ),
        StopReason::PageLimit => tracing::warn!(
            "Page limit reached ({} pages fetched); output may be incomplete",
            listing.pages_fetched
        ),
    }
    tracing::info!("Found {} disclosures", listing.disclosures.len());

    let storage = StorageManager::new(&config.output_dir);
    let saved = storage.save_disclosures(&date, &listing.disclosures)?;
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::disclosure::tests::list_page;
    use std::fs;
    use tempfile::tempdir;

    fn config(server: &mockito::Server, output_dir: PathBuf, date: &str) -> RunConfig {
        RunConfig {
            date: Some(date.to_string()),
            output_dir,
            base_url: server.url(),
            request_delay: Duration::ZERO,
            debug: false,
        }
    }

    #[tokio::test]
    async fn two_full_pages_then_not_found() {
        let mut server = mockito::Server::new_async().await;
        let page1 = server
            .mock("GET", "/inbs/I_list_001_20240105.html")
            .with_status(200)
            .with_body(list_page(&[
                ("15:00", "11110", "A社", "決算短信", "東"),
                ("15:00", "22220", "B社", "配当", "東"),
            ]))
            .create_async()
            .await;
        let page2 = server
            .mock("GET", "/inbs/I_list_002_20240105.html")
            .with_status(200)
            .with_body(list_page(&[
                ("14:00", "33330", "C社", "人事", "名"),
                ("13:00", "44440", "D社", "自己株式", "東名"),
            ]))
            .create_async()
            .await;
        let page3 = server
            .mock("GET", "/inbs/I_list_003_20240105.html")
            .with_status(404)
            .create_async()
            .await;
        let page4 = server
            .mock("GET", "/inbs/I_list_004_20240105.html")
            .expect(0)
            .create_async()
            .await;

        let temp_dir = tempdir().unwrap();
        let out_dir = temp_dir.path().join("csv");
        let path = run(&config(&server, out_dir.clone(), "2024-01-05"))
            .await
            .unwrap()
            .expect("csv written");

        assert_eq!(path, out_dir.join("2024-01-05.csv"));
        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            [
                "time,code,name,title,place",
                "15:00,1111,A社,決算短信,東",
                "15:00,2222,B社,配当,東",
                "14:00,3333,C社,人事,名",
                "13:00,4444,D社,自己株式,東名",
            ]
        );
        for mock in [page1, page2, page3, page4] {
            mock.assert_async().await;
        }
    }

    #[tokio::test]
    async fn empty_first_page_writes_nothing() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/inbs/I_list_001_20240105.html")
            .with_status(200)
            .with_body(list_page(&[]))
            .create_async()
            .await;
        let page2 = server
            .mock("GET", "/inbs/I_list_002_20240105.html")
            .expect(0)
            .create_async()
            .await;

        let temp_dir = tempdir().unwrap();
        let out_dir = temp_dir.path().join("csv");
        let saved = run(&config(&server, out_dir.clone(), "2024-01-05")).await.unwrap();

        assert!(saved.is_none());
        assert!(!out_dir.exists());
        page2.assert_async().await;
    }

    #[tokio::test]
    async fn server_error_aborts_without_output() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/inbs/I_list_001_20240105.html")
            .with_status(500)
            .create_async()
            .await;

        let temp_dir = tempdir().unwrap();
        let out_dir = temp_dir.path().join("csv");
        let err = run(&config(&server, out_dir.clone(), "2024-01-05")).await.unwrap_err();

        assert!(matches!(err, AppError::FetchFailure(_)));
        assert!(err.to_string().contains("500"));
        assert!(!out_dir.exists());
    }

    #[tokio::test]
    async fn failure_after_good_pages_writes_nothing() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/inbs/I_list_001_20240105.html")
            .with_status(200)
            .with_body(list_page(&[("15:00", "11110", "A社", "決算短信", "東")]))
            .create_async()
            .await;
        server
            .mock("GET", "/inbs/I_list_002_20240105.html")
            .with_status(503)
            .create_async()
            .await;

        let temp_dir = tempdir().unwrap();
        let out_dir = temp_dir.path().join("csv");
        let result = run(&config(&server, out_dir.clone(), "2024-01-05")).await;

        assert!(matches!(result, Err(AppError::FetchFailure(_))));
        assert!(!out_dir.join("2024-01-05.csv").exists());
    }

    #[tokio::test]
    async fn invalid_date_makes_no_requests() {
        let mut server = mockito::Server::new_async().await;
        let any_request = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let temp_dir = tempdir().unwrap();
        let err = run(&config(&server, temp_dir.path().to_path_buf(), "not-a-date"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidDateFormat(ref raw) if raw == "not-a-date"));
        any_request.assert_async().await;
    }

    #[tokio::test]
    async fn debug_mode_keeps_raw_pages() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/inbs/I_list_001_20240105.html")
            .with_status(200)
            .with_body(list_page(&[("15:00", "11110", "A社", "決算短信", "東")]))
            .create_async()
            .await;
        server
            .mock("GET", "/inbs/I_list_002_20240105.html")
            .with_status(404)
            .create_async()
            .await;

        let temp_dir = tempdir().unwrap();
        let mut cfg = config(&server, temp_dir.path().to_path_buf(), "2024-01-05");
        cfg.debug = true;
        run(&cfg).await.unwrap();

        let raw = temp_dir
            .path()
            .join("debug")
            .join("2024-01-05")
            .join("I_list_001_20240105.html");
        assert!(fs::read_to_string(raw).unwrap().contains("main-list-table"));
        assert!(temp_dir.path().join("2024-01-05.csv").exists());
    }
}
