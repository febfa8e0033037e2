use std::{sync::Arc, time::Duration};

use crate::{
    Config,
    store::PlaylistStore,
    transfer::{FetchError, PlaylistFetcher},
};

pub type AppStateRef = Arc<AppState>;
pub struct AppState {
    pub config: Arc<Config>,
    pub store: PlaylistStore,
    /// Fetches the playlist afresh for every catalog/meta/stream request
    pub fetcher: PlaylistFetcher,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let config = Arc::new(config);
        let http_client = PlaylistFetcher::build_client(
            &config.http,
            Duration::from_secs(config.fetch_timeout),
        )?;

        Ok(Self {
            store: PlaylistStore::new(&config.store_path),
            fetcher: PlaylistFetcher::new(http_client),
            config,
        })
    }
}
