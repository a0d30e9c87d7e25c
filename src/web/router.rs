use std::path::Path;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::activity_store::ActivityStore;
use crate::web::routes::{activities, health};

pub const INDEX_PATH: &str = "/static/index.html";

pub fn build_router(store: ActivityStore, static_dir: impl AsRef<Path>) -> Router {
    let api_routes = Router::new()
        .route("/activities", get(activities::activities_handler))
        .route("/activities/:activity_name", get(activities::activity_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler).delete(activities::unregister_handler),
        )
        .route("/health", get(health::health_handler))
        // API responses are never cached.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .merge(api_routes)
        .nest_service("/static", get_service(ServeDir::new(static_dir.as_ref())))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
