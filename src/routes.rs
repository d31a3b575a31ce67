// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{auth, quiz},
    state::AppState,
    utils::basic_auth::auth_middleware,
};

/// Assembles the main application router.
///
/// * `/api/register` is public.
/// * Every `/api/quizzes` route sits behind Basic authentication.
/// * Applies global middleware (Trace, CORS for the configured origins).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins(&state.config.cors_allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    // `/completed` is a static segment, so it wins over `/{id}`.
    let quiz_routes = Router::new()
        .route(
            "/api/quizzes",
            get(quiz::list_quizzes).post(quiz::create_quiz),
        )
        .route("/api/quizzes/completed", get(quiz::list_completions))
        .route(
            "/api/quizzes/{id}",
            get(quiz::get_quiz).delete(quiz::delete_quiz),
        )
        .route("/api/quizzes/{id}/solve", post(quiz::solve_quiz))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/api/register", post(auth::register))
        .merge(quiz_routes)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// `*` opens CORS to every origin; unparsable entries are skipped.
fn allowed_origins(configured: &[String]) -> AllowOrigin {
    if configured.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}
