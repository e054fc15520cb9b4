use super::{first_param, query_pairs, QueryPairs};
use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use citydb_core::api::{CityView, ComparisonView, ErrorView};
use citydb_core::query::not_found_message;
use citydb_core::{CityQuery, QueryError};
use std::sync::Arc;

/// Presentation of a comparison result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompareFormat {
    /// JSON object with `city1`, `city2`, `northern_city`, ...
    #[default]
    Json,
    /// A bare JSON string holding the legacy prose verdict.
    Text,
}

impl CompareFormat {
    /// `json` or `text`; anything else is rejected.
    pub fn parse(raw: Option<&str>) -> ServerResult<Self> {
        match raw {
            None | Some("json") => Ok(CompareFormat::Json),
            Some("text") => Ok(CompareFormat::Text),
            Some(other) => Err(ServerError::BadRequest(format!(
                "format must be \"json\" or \"text\", got {other:?}"
            ))),
        }
    }
}

/// `GET /city/{id}`
///
/// Unknown ids answer `200 {"error": "City not found"}`. So does an id that
/// does not percent-decode to UTF-8: it cannot name any city.
pub async fn get_city(
    State(state): State<Arc<ServerState>>,
    path: Result<Path<String>, PathRejection>,
) -> ServerResult<Response> {
    let Ok(Path(id)) = path else {
        return Err(QueryError::CityNotFound.into());
    };
    let store = state.store().await?;

    let city = store
        .lookup_by_id(&id)
        .inspect_err(|_| tracing::debug!(%id, "city lookup missed"))?;
    Ok(Json(CityView::from(city)).into_response())
}

/// `GET /city/` with no id.
pub async fn missing_city() -> ServerError {
    QueryError::CityNotFound.into()
}

/// `GET /city/compare/{name1}/{name2}`
///
/// Unknown names are reported in-band with a `200`, naming the first
/// missing city.
pub async fn compare_cities(
    State(state): State<Arc<ServerState>>,
    path: Result<Path<(String, String)>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ServerResult<Response> {
    let Path((name1, name2)) = path?;
    let format = CompareFormat::parse(first_param(&query_pairs(query)?, "format"))?;

    let store = state.store().await?;
    let result = store.compare_cities(&name1, &name2);

    let response = match (format, result) {
        (CompareFormat::Json, Ok(cmp)) => Json(ComparisonView::from(&cmp)).into_response(),
        (CompareFormat::Json, Err(err)) => Json(ErrorView::new(err.to_string())).into_response(),
        (CompareFormat::Text, Ok(cmp)) => Json(cmp.summary()).into_response(),
        (CompareFormat::Text, Err(QueryError::NameNotFound(name))) => {
            Json(not_found_message(&name)).into_response()
        }
        (CompareFormat::Text, Err(err)) => Json(err.to_string()).into_response(),
    };
    Ok(response)
}
