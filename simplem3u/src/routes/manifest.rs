use axum::Json;

use crate::catalog::{Manifest, manifest};

pub async fn get_manifest() -> Json<Manifest> {
    Json(manifest())
}
