use crate::controller::announcement::routes::AnnouncementRoutes;
use crate::controller::health::routes::HealthRoutes;
use crate::state::AppState;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

pub struct Routes;

impl Routes {
    pub fn routes(app_state: &AppState) -> Router {
        Router::new()
            .nest("/health", HealthRoutes::routes())
            .nest("/announcements", AnnouncementRoutes::routes(app_state))
            .layer(CatchPanicLayer::new())
    }
}
