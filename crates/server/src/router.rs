use crate::{
    doc::ApiDoc,
    routes::{api, course, departments, health},
    state::AppState,
};
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the application router with sessions kept in `store` and compression
pub fn build_router<S>(state: AppState, store: S) -> Router
where
    S: SessionStore + Clone,
{
    let sessions = SessionManagerLayer::new(store)
        .with_secure(state.config.session_secure)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            state.config.session_ttl_minutes,
        )));

    Router::new()
        // Pages
        .route("/", get(departments::index).post(departments::submit))
        .route(
            "/add",
            get(course::add_course_page).post(course::add_course_submit),
        )
        // API
        .route("/health", get(health::health))
        .route("/api/departments", get(api::list_departments))
        .route("/api/courses", get(api::compare_courses))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .layer(sessions),
        )
        .with_state(state)
}
