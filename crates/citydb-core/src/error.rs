// crates/citydb-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading a dataset into a [`CityStore`](crate::CityStore).
#[derive(Debug, Error)]
pub enum CityDbError {
    /// The source file does not exist or cannot be opened.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Errors surfaced by the query engine.
///
/// Transport layers decide how these are presented; the HTTP router keeps the
/// not-found variants in-band as `200` bodies and maps pagination errors to
/// `400`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("City not found")]
    CityNotFound,

    #[error("City {0} not found")]
    NameNotFound(String),

    #[error("Invalid pagination: page={page}, per_page={per_page} (both must be >= 1)")]
    InvalidPagination { page: i64, per_page: i64 },
}

pub type Result<T> = std::result::Result<T, CityDbError>;
