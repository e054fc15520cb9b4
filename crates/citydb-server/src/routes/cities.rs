use super::{first_param, query_pairs, QueryPairs};
use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use citydb_core::api::CitySummaryView;
use citydb_core::CityQuery;
use std::sync::Arc;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PER_PAGE: i64 = 5;

fn parse_param(name: &str, raw: Option<&str>, default: i64) -> ServerResult<i64> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("{name} must be an integer, got {value:?}"))),
    }
}

/// `GET /cities?page=1&per_page=5`
///
/// Parameters are read as raw strings so malformed numbers get the same JSON
/// error body as out-of-range ones. A repeated key uses its first value.
pub async fn list_cities(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ServerResult<Response> {
    let pairs = query_pairs(query)?;
    let page = parse_param("page", first_param(&pairs, "page"), DEFAULT_PAGE)?;
    let per_page = parse_param("per_page", first_param(&pairs, "per_page"), DEFAULT_PER_PAGE)?;

    let store = state.store().await?;
    let cities: Vec<CitySummaryView<'_>> = store
        .list_cities(page, per_page)?
        .into_iter()
        .map(CitySummaryView::from)
        .collect();

    Ok(Json(cities).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_params_use_defaults() {
        assert_eq!(parse_param("page", None, 1).unwrap(), 1);
        assert_eq!(parse_param("per_page", None, 5).unwrap(), 5);
    }

    #[test]
    fn params_must_be_integers() {
        assert_eq!(parse_param("page", Some(" 3 "), 1).unwrap(), 3);
        assert_eq!(parse_param("page", Some("-2"), 1).unwrap(), -2);
        assert!(matches!(
            parse_param("page", Some("two"), 1),
            Err(ServerError::BadRequest(_))
        ));
        assert!(parse_param("per_page", Some(""), 5).is_err());
    }
}
