//! Catalog loading entry points.
//!
//! # Responsibility
//! - Turn the static search catalog (JSON) into a validated [`Catalog`].
//! - Hide where the catalog comes from behind [`CatalogSource`].
//!
//! # Invariants
//! - A catalog handed out by this module has passed `Catalog::validate()`.
//! - Loading never yields a partial catalog; any failure is a whole failure.
//!
//! [`Catalog`]: crate::model::article::Catalog

use crate::model::article::CatalogValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod source;

pub use source::{parse_catalog, CatalogSource, JsonFileSource, StaticSource};

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug)]
pub enum CatalogError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(CatalogValidationError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "malformed catalog json: {err}"),
            Self::Invalid(err) => write!(f, "invalid catalog: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<CatalogValidationError> for CatalogError {
    fn from(value: CatalogValidationError) -> Self {
        Self::Invalid(value)
    }
}

impl CatalogError {
    /// Stable short code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "catalog_io_failed",
            Self::Parse(_) => "catalog_parse_failed",
            Self::Invalid(_) => "catalog_invalid",
        }
    }
}
