use std::{error::Error, fmt::Display, time::Duration};

use bytes::Bytes;
use log::{error, info};
use playlist_rs::format::M3uPlaylist;
use reqwest::{Client, Proxy};
use tokio::task::JoinError;

use crate::{HttpConfig, transfer::parse_playlist_async};

/// Downloads and scans the configured playlist, once per call.
pub struct PlaylistFetcher {
    http_client: Client,
}

impl PlaylistFetcher {
    pub fn new(http_client: Client) -> Self {
        PlaylistFetcher { http_client }
    }

    /// Builds the fetch client. Every request is bounded by `timeout`.
    pub fn build_client(http: &HttpConfig, timeout: Duration) -> Result<Client, FetchError> {
        let mut builder = Client::builder().timeout(timeout);

        if let Some(user_agent) = &http.user_agent {
            builder = builder.user_agent(user_agent);
        }

        if let Some(proxy) = &http.proxy {
            info!("With proxy: {}", proxy);
            builder = builder.proxy(Proxy::all(proxy)?);
        }

        Ok(builder.build()?)
    }

    pub async fn fetch(&self, location: impl AsRef<str>) -> Result<Bytes, FetchError> {
        let location = location.as_ref();
        info!("Fetching M3U: {}", location);

        let response = self.http_client.get(location).send().await?;
        info!("M3U response: {}", response.status());
        if !response.status().is_success() {
            return Err(FetchError::RequestNotSuccess(response.status().as_u16()));
        }

        Ok(response.bytes().await?)
    }

    pub async fn try_parse(&self, location: impl AsRef<str>) -> Result<M3uPlaylist, FetchError> {
        let data = self.fetch(location).await?;
        Ok(parse_playlist_async(data).await?)
    }

    /// Like `try_parse`, but any failure is logged and yields an empty playlist.
    pub async fn parse(&self, location: impl AsRef<str>) -> M3uPlaylist {
        let location = location.as_ref();
        match self.try_parse(location).await {
            Ok(playlist) => {
                info!("Total streams parsed: {}", playlist.len());
                playlist
            }
            Err(e) => {
                error!("Error parsing M3U {}: {}", location, e);
                M3uPlaylist::default()
            }
        }
    }
}

#[derive(Debug)]
pub enum FetchError {
    RequestError(reqwest::Error),
    Timeout,
    RequestNotSuccess(u16),
    JoinError(JoinError),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestError(e) => e.fmt(f),
            Self::Timeout => write!(f, "Playlist request timed out"),
            Self::RequestNotSuccess(status_code) => {
                write!(f, "Server respond with status code {}", status_code)
            }
            Self::JoinError(e) => e.fmt(f),
        }
    }
}

impl Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Self::Timeout
        } else {
            Self::RequestError(value)
        }
    }
}

impl From<JoinError> for FetchError {
    fn from(value: JoinError) -> Self {
        Self::JoinError(value)
    }
}
