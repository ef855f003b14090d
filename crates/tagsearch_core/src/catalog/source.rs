//! Catalog sources.
//!
//! # Responsibility
//! - Read the catalog document from a file or from memory.
//! - Emit `catalog_fetch` log events with duration and status.

use super::{CatalogError, CatalogResult};
use crate::model::article::Catalog;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Where a catalog comes from.
///
/// Implementations perform one complete read per call; callers decide whether
/// a failure is final.
pub trait CatalogSource {
    /// Short label used in log events (`file`, `static`, ...).
    fn mode(&self) -> &'static str;
    fn fetch(&self) -> CatalogResult<Catalog>;
}

/// Parses and validates a catalog document (`{ "articles": [...] }`).
pub fn parse_catalog(json: &str) -> CatalogResult<Catalog> {
    let catalog: Catalog = serde_json::from_str(json)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Reads the catalog from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for JsonFileSource {
    fn mode(&self) -> &'static str {
        "file"
    }

    fn fetch(&self) -> CatalogResult<Catalog> {
        let started_at = Instant::now();
        info!("event=catalog_fetch module=catalog status=start mode=file");

        let result = std::fs::read_to_string(&self.path)
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })
            .and_then(|raw| parse_catalog(&raw));

        match &result {
            Ok(catalog) => info!(
                "event=catalog_fetch module=catalog status=ok mode=file duration_ms={} articles={}",
                started_at.elapsed().as_millis(),
                catalog.len()
            ),
            Err(err) => error!(
                "event=catalog_fetch module=catalog status=error mode=file duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                err.code(),
                err
            ),
        }
        result
    }
}

/// Serves an in-memory JSON document; used by embedders and tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    json: String,
}

impl StaticSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl CatalogSource for StaticSource {
    fn mode(&self) -> &'static str {
        "static"
    }

    fn fetch(&self) -> CatalogResult<Catalog> {
        parse_catalog(&self.json)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_catalog, CatalogSource, JsonFileSource};
    use crate::catalog::CatalogError;
    use std::io::Write;

    #[test]
    fn parse_ignores_unknown_fields() {
        let catalog = parse_catalog(
            r#"{"articles":[{"id":"1","title":"t","tags":["a"],"tags_as_text":"a","formatted_created_at":"x"}],"generated":true}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.articles[0].created_display, "x");
    }

    #[test]
    fn parse_rejects_missing_articles_key() {
        let err = parse_catalog(r#"{"items":[]}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn parse_keeps_records_with_repeated_ids() {
        let catalog = parse_catalog(
            r#"{"articles":[{"id":"1","title":"a"},{"id":"1","title":"b"}]}"#,
        )
        .unwrap();
        let titles: Vec<&str> = catalog.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn parse_rejects_blank_id() {
        let err = parse_catalog(r#"{"articles":[{"id":" ","title":"a"}]}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
        assert_eq!(err.code(), "catalog_invalid");
    }

    #[test]
    fn file_source_reads_catalog_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"articles":[{{"id":"42","title":"hello"}}]}}"#).unwrap();

        let source = JsonFileSource::new(file.path());
        let catalog = source.fetch().unwrap();
        assert_eq!(catalog.articles[0].id, "42");
        assert_eq!(source.mode(), "file");
    }

    #[test]
    fn file_source_reports_missing_file_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("search.json"));
        let err = source.fetch().unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("search.json"));
    }
}
