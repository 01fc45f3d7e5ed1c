// src/export/mod.rs

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// One output collection: a fixed header followed by scraped rows in the
/// order the source tables were visited.
#[derive(Debug)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn append(&mut self, rows: Vec<Vec<String>>) {
        self.rows.extend(rows);
    }
}

/// Serialize a dataset to CSV at `path`, creating parent directories as
/// needed. Header first, then rows in collection order. The writer is
/// flexible because legacy rows vary in width.
pub fn write_csv(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {:?}", parent))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating CSV file {:?}", path))?;

    writer
        .write_record(&dataset.headers)
        .with_context(|| format!("writing header to {:?}", path))?;
    for row in &dataset.rows {
        writer
            .write_record(row)
            .with_context(|| format!("writing record to {:?}", path))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {:?}", path))?;

    info!(path = %path.display(), rows = dataset.rows.len(), "wrote dataset");
    Ok(())
}
