pub mod config;
pub mod logging;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::AppState;

/// Any origin may call the API with the methods and headers the browser
/// client uses. Answers preflight requests.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn create_app(config: &Config) -> axum::Router {
    let state = AppState::from_config(config);

    // CorsLayer only advertises methods and headers on preflight; ordinary
    // responses get them here, preflight values win.
    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}
