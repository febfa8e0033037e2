use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::AppStateRef;

mod catalog;
mod configure;
mod manifest;
mod meta;
mod stream;

/// Host clients append `.json` to every resource id.
fn resource_id(id: &str) -> &str {
    id.strip_suffix(".json").unwrap_or(id)
}

pub fn get_routes(app_state: &AppStateRef) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/manifest.json", get(manifest::get_manifest))
        .route("/set-m3u", post(configure::set_playlist))
        .route("/catalog/{type}/{id}", get(catalog::get_catalog))
        .route("/catalog/{type}/{id}/{extra}", get(catalog::get_catalog_with_extra))
        .route("/meta/{type}/{id}", get(meta::get_meta))
        .route("/stream/{type}/{id}", get(stream::get_streams))
        .fallback_service(ServeDir::new(&app_state.config.public_dir))
        .layer(cors)
        .with_state(app_state.clone())
}

#[cfg(test)]
mod tests {
    use super::resource_id;

    #[test]
    fn test_resource_id() {
        assert_eq!(resource_id("m3u_playlist.json"), "m3u_playlist");
        assert_eq!(resource_id("m3u_stream_1"), "m3u_stream_1");
        assert_eq!(resource_id(".json"), "");
    }
}
