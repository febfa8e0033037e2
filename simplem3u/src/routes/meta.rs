use axum::{
    Json,
    extract::{Path, State},
};
use log::info;
use serde::Serialize;

use crate::{
    AppStateRef,
    catalog::{MetaPreview, playlist_meta},
};

/// Serializes to `{}` when there is nothing to describe
#[derive(Serialize)]
pub struct MetaResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaPreview>,
}

pub async fn get_meta(
    State(state): State<AppStateRef>,
    Path((_, id)): Path<(String, String)>,
) -> Json<MetaResponse> {
    let id = super::resource_id(&id);
    let source = state.store.get();
    info!("Meta requested, id: {}, m3uUrl: {}", id, source);

    Json(MetaResponse {
        meta: playlist_meta(&source, id),
    })
}
