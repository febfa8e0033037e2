use axum::{
    Json,
    extract::{Path, State},
};
use log::info;
use serde::Serialize;

use crate::{
    AppStateRef,
    catalog::{StreamAddress, StreamDescriptor, project_streams},
};

#[derive(Serialize)]
pub struct StreamsResponse {
    pub streams: Vec<StreamDescriptor>,
}

pub async fn get_streams(
    State(state): State<AppStateRef>,
    Path((_, id)): Path<(String, String)>,
) -> Json<StreamsResponse> {
    let id = super::resource_id(&id);
    let source = state.store.get();
    info!("Stream requested, id: {}, m3uUrl: {}", id, source);

    let address = StreamAddress::parse(id);
    if !source.is_configured() || !address.needs_playlist() {
        info!("No matching stream found");
        return Json(StreamsResponse {
            streams: Vec::new(),
        });
    }

    // parsed again on every request, nothing is cached
    let playlist = state.fetcher.parse(source.as_str()).await;
    let streams = project_streams(address, &playlist);
    info!("Returning {} streams for {}", streams.len(), id);

    Json(StreamsResponse { streams })
}
