use axum::{
    Json,
    extract::{Path, State},
};
use log::info;
use serde::Serialize;

use crate::{
    AppStateRef,
    catalog::{MetaPreview, catalog_metas},
};

#[derive(Serialize)]
pub struct CatalogResponse {
    pub metas: Vec<MetaPreview>,
}

pub async fn get_catalog(
    State(state): State<AppStateRef>,
    Path((_, id)): Path<(String, String)>,
) -> Json<CatalogResponse> {
    let source = state.store.get();
    info!(
        "Catalog requested, id: {}, m3uUrl: {}",
        super::resource_id(&id),
        source
    );

    Json(CatalogResponse {
        metas: catalog_metas(&source),
    })
}

/// Search and paging extras are ignored, the catalog has one item at most.
pub async fn get_catalog_with_extra(
    state: State<AppStateRef>,
    Path((content_type, id, _)): Path<(String, String, String)>,
) -> Json<CatalogResponse> {
    get_catalog(state, Path((content_type, id))).await
}
