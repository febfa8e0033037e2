use std::convert::Infallible;

use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::header,
};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{AppStateRef, default_with_log};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPlaylistBody {
    #[serde(default)]
    pub m3u_url: Option<String>,
}

/// Accepts both JSON and urlencoded form bodies. A body that cannot be read
/// counts as one without a URL.
impl<S: Send + Sync> FromRequest<S> for SetPlaylistBody {
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|x| x.to_str().ok())
            .is_some_and(|x| x.starts_with("application/x-www-form-urlencoded"));

        let body = if is_form {
            Form::<Self>::from_request(req, state)
                .await
                .map(|Form(x)| x)
                .unwrap_or_else(default_with_log!("Parse form body"))
        } else {
            Json::<Self>::from_request(req, state)
                .await
                .map(|Json(x)| x)
                .unwrap_or_else(default_with_log!("Parse JSON body"))
        };

        Ok(body)
    }
}

#[derive(Debug, Serialize)]
pub struct SetPlaylistResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn set_playlist(
    State(state): State<AppStateRef>,
    body: SetPlaylistBody,
) -> Json<SetPlaylistResponse> {
    let location = body.m3u_url.unwrap_or_default();

    Json(match state.store.set(&location) {
        Ok(()) => SetPlaylistResponse {
            success: true,
            message: Some("M3U URL saved".into()),
            error: None,
        },
        Err(e) => {
            warn!("Rejected M3U URL {:?}: {}", location, e);
            SetPlaylistResponse {
                success: false,
                message: None,
                error: Some(e.to_string()),
            }
        }
    })
}
