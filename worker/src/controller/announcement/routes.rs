use crate::infra::axum::AppJson;
use crate::infra::error::AppError;
use crate::state::AppState;
use announcement_dispatcher::announcement::AnnouncementRecord;
use announcement_dispatcher::dispatch_result::DispatchResult;
use axum::extract::{Path, State};
use axum::routing::post;
use axum::Router;
use tracing::info;

pub struct AnnouncementRoutes;

impl AnnouncementRoutes {
    pub fn routes(app_state: &AppState) -> Router {
        Router::new().route("/:announcement_id", post(announcement_created_handler)).with_state(app_state.clone())
    }
}

/// Called by the hosting platform once per created announcement document.
///
/// Always answers 200 with the dispatch counts; channel failures are never re-raised.
async fn announcement_created_handler(
    State(app_state): State<AppState>,
    Path(announcement_id): Path<String>,
    AppJson(document): AppJson<AnnouncementRecord>,
) -> Result<AppJson<DispatchResult>, AppError> {
    info!("POST /announcements/{announcement_id}");

    let record = AnnouncementRecord {
        id: announcement_id,
        ..document
    };

    Ok(AppJson(app_state.dispatcher.dispatch(&record).await))
}
