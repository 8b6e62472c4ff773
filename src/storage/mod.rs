// src/storage/mod.rs
use csv::WriterBuilder;
use std::fs;
use std::path::{Path, PathBuf};

use crate::tdnet::date::DisclosureDate;
use crate::tdnet::models::Disclosure;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Nothing is created on disk until something is saved.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// `<base_dir>/<yyyy>-<MM>-<dd>.csv`
    pub fn csv_path(&self, date: &DisclosureDate) -> PathBuf {
        self.base_dir.join(format!("{}.csv", date.dashed()))
    }

    /// Writes the day's disclosures with a `time,code,name,title,place` header.
    ///
    /// Returns `Ok(None)` without touching the filesystem when there is
    /// nothing to write; an existing file for the date is left as it was.
    pub fn save_disclosures(
        &self,
        date: &DisclosureDate,
        disclosures: &[Disclosure],
    ) -> Result<Option<PathBuf>, StorageError> {
        if disclosures.is_empty() {
            tracing::debug!("No disclosures for {}, skipping CSV output", date.dashed());
            return Ok(None);
        }

        // Create the directory if it doesn't exist
        if !self.base_dir.as_os_str().is_empty() && !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir)?;
        }

        let file_path = self.csv_path(date);
        let mut writer = WriterBuilder::new()
            .has_headers(true)
            .from_path(&file_path)?;

        // Header row comes from the Disclosure field names on the first record.
        for disclosure in disclosures {
            writer.serialize(disclosure)?;
        }
        writer.flush()?;

        tracing::info!(
            "Saved {} disclosures to {}",
            disclosures.len(),
            file_path.display()
        );

        Ok(Some(file_path))
    }
}
