use super::{first_param, query_pairs, QueryPairs};
use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use citydb_core::CityQuery;
use std::sync::Arc;

/// `GET /suggest?name=...`
///
/// An absent or empty `name` lists every name.
pub async fn suggest(
    State(state): State<Arc<ServerState>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ServerResult<Response> {
    let pairs = query_pairs(query)?;
    let prefix = first_param(&pairs, "name").unwrap_or_default();

    let store = state.store().await?;
    let names = store.suggest_by_prefix(prefix);
    Ok(Json(names).into_response())
}
