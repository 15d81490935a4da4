use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeFile,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::todos::{create_todo, delete_todo, get_todo, list_todos, update_todo},
    state::AppState,
};

/// Collection paths. `/to-dos` is kept as an alias of `/todos`.
const TODO_PATHS: [&str; 2] = ["/todos", "/to-dos"];

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Any origin may call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    let mut router = Router::new().route_service("/", ServeFile::new(&state.index_file));

    for path in TODO_PATHS {
        router = router
            .route(path, get(list_todos).post(create_todo))
            .route(
                &format!("{path}/{{id}}"),
                get(get_todo)
                    .put(update_todo)
                    .patch(update_todo)
                    .delete(delete_todo),
            );
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.request_timeout,
        ))
        .with_state(state)
}
