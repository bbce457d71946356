use crate::{AppState, error::AppError, views};
use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    response::Html,
};
use query_engine::QueryParams;
use std::sync::Arc;

/// # GET /
/// The filterable, sortable school list. Always answers 200. Parameters are
/// read pair by pair, so a repeated key keeps its last value instead of
/// invalidating the others.
pub async fn list_schools(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Html<String> {
    let params = match query {
        Ok(Query(pairs)) => QueryParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable query string; using defaults.");
            QueryParams::default()
        }
    };

    let outcome = state.engine.run(&state.dataset, &params);
    Html(views::render_list_page(&outcome, &params))
}

/// # GET /details/:code
pub async fn school_details(
    Path(code): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let school = state
        .dataset
        .find_by_code(&code)
        .ok_or(AppError::NotFound(code))?;
    Ok(Html(views::render_detail_page(school)))
}
