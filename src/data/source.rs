//! Results file discovery and loading

use crate::{HoopsError, RawTable, Result};
use std::path::{Path, PathBuf};

/// Anything that can supply the raw results table
pub trait GameSource {
    /// Human-readable origin, used in logs
    fn describe(&self) -> String;

    /// Load every available results row
    fn load(&self) -> Result<RawTable>;
}

/// All CSV files matching a glob pattern inside one directory,
/// concatenated in path order
pub struct CsvDirectorySource {
    dir: PathBuf,
    pattern: String,
}

impl CsvDirectorySource {
    pub fn new<P: AsRef<Path>>(dir: P, pattern: &str) -> Self {
        CsvDirectorySource {
            dir: dir.as_ref().to_path_buf(),
            pattern: pattern.to_string(),
        }
    }

    /// Matching files, sorted so loads are reproducible
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let full = self.dir.join(&self.pattern);
        let mut files = Vec::new();
        for entry in glob::glob(&full.to_string_lossy())? {
            files.push(entry.map_err(|e| HoopsError::Io(e.into_error()))?);
        }
        files.sort();
        Ok(files)
    }
}

impl GameSource for CsvDirectorySource {
    fn describe(&self) -> String {
        self.dir.join(&self.pattern).display().to_string()
    }

    fn load(&self) -> Result<RawTable> {
        let files = self.discover()?;
        if files.is_empty() {
            return Err(HoopsError::Config(format!(
                "No results files match {}",
                self.describe()
            )));
        }

        let mut combined: Option<RawTable> = None;
        for path in &files {
            let table = read_csv(path)?;
            log::debug!("Read {} rows from {}", table.len(), path.display());

            match combined.as_mut() {
                None => combined = Some(table),
                Some(all) => {
                    if let Some(column) = first_mismatch(&all.columns, &table.columns) {
                        log::warn!("{} does not match the first file's header", path.display());
                        return Err(HoopsError::Schema { column });
                    }
                    all.rows.extend(table.rows);
                }
            }
        }

        let table = combined.unwrap_or_default();
        log::info!("Loaded {} rows from {} files", table.len(), files.len());
        Ok(table)
    }
}

/// Read one CSV file with spreadsheet-style header names
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let mut table = RawTable::new(dedupe_headers(&headers));

    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(|c| c.to_string()).collect());
    }
    Ok(table)
}

/// Name blank headers `Unnamed: <index>` and suffix repeats with `.1`,
/// `.2`, ... so the second `PTS` column reads as `PTS.1`
pub fn dedupe_headers(headers: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(headers.len());
    for (i, header) in headers.iter().enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {}", i)
        } else {
            header.clone()
        };

        let mut name = base.clone();
        let mut n = 1;
        while out.contains(&name) {
            name = format!("{}.{}", base, n);
            n += 1;
        }
        out.push(name);
    }
    out
}

/// First column name that differs between two headers
fn first_mismatch(expected: &[String], actual: &[String]) -> Option<String> {
    let longest = expected.len().max(actual.len());
    (0..longest).find_map(|i| match (expected.get(i), actual.get(i)) {
        (Some(e), Some(a)) if e == a => None,
        (Some(e), _) => Some(e.clone()),
        (None, Some(a)) => Some(a.clone()),
        (None, None) => None,
    })
}
