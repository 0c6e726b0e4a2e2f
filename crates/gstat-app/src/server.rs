use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use serde::Deserialize;
use uuid::Uuid;

use crate::lookup::{self, LookupOutcome};
use crate::render::{self, FormState, PageContent};
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

#[derive(Debug, Deserialize)]
struct IndexParams {
    q: Option<String>,
    /// Season dropdown value; the empty string means "walk the candidates".
    season: Option<String>,
}

async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IndexParams>,
) -> Html<String> {
    let raw = params.q.as_deref().unwrap_or("").trim();
    let pinned = params.season.as_deref().and_then(|s| s.parse().ok());

    let content = if raw.is_empty() {
        PageContent::Empty
    } else {
        let lookup_id = Uuid::new_v4();
        tracing::info!("lookup {lookup_id}: '{raw}' (season {pinned:?})");

        match lookup::run_lookup(
            state.api.as_ref(),
            &state.quota,
            &state.config.lookup,
            raw,
            pinned,
        )
        .await
        {
            Ok(LookupOutcome::Found { card }) => {
                tracing::info!("lookup {lookup_id}: found {} ({})", card.name, card.season);
                PageContent::Card(card)
            }
            Ok(LookupOutcome::NotFound { query, seasons }) => {
                tracing::info!("lookup {lookup_id}: not found");
                PageContent::NotFound { query, seasons }
            }
            Ok(LookupOutcome::QuotaExhausted { status }) => {
                tracing::warn!(
                    "lookup {lookup_id}: blocked, {}/{} used",
                    status.used,
                    status.limit
                );
                PageContent::QuotaBlocked { status }
            }
            Err(e) => {
                tracing::error!("lookup {lookup_id}: {e:#}");
                PageContent::Failure
            }
        }
    };

    let status = state.quota.status().await;
    let form = FormState {
        query: raw.to_string(),
        seasons: state.config.lookup.seasons.clone(),
        pinned,
    };

    Html(render::page(&content, &form, status))
}
