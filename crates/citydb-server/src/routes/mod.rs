//! API route handlers
//!
//! - `city`: lookup by id and pairwise comparison
//! - `cities`: paginated listing
//! - `suggest`: name-prefix suggestions
//! - `health`: liveness and dataset stats

pub mod cities;
pub mod city;
pub mod health;
pub mod suggest;

use crate::error::{ServerError, ServerResult};
use axum::extract::rejection::QueryRejection;
use axum::extract::Query;

/// Raw `key=value` pairs in the order they appear in the query string.
pub type QueryPairs = Vec<(String, String)>;

/// Unwrap query pairs, turning a rejection into a JSON `400`.
pub fn query_pairs(query: Result<Query<QueryPairs>, QueryRejection>) -> ServerResult<QueryPairs> {
    Ok(query?.0)
}

/// The first value given for `key`; later repeats are ignored.
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// 404 Not Found handler
///
/// Returns a JSON error body for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_param_wins() {
        let pairs: QueryPairs = vec![
            ("page".into(), "1".into()),
            ("per_page".into(), "3".into()),
            ("page".into(), "2".into()),
        ];
        assert_eq!(first_param(&pairs, "page"), Some("1"));
        assert_eq!(first_param(&pairs, "per_page"), Some("3"));
        assert_eq!(first_param(&pairs, "name"), None);
    }
}
