mod manifest;
mod projector;
pub use manifest::*;
pub use projector::*;

/// Id of the single catalog item standing for the whole playlist
pub const PLAYLIST_ID: &str = "m3u_playlist";
/// Prefix of ids addressing one entry by its position, e.g. `m3u_stream_3`
pub const STREAM_ID_PREFIX: &str = "m3u_stream_";
pub const ID_PREFIX: &str = "m3u_";
pub const CATALOG_ID: &str = "m3u_catalog";
pub const CONTENT_TYPE: &str = "movie";
pub const BINGE_GROUP: &str = PLAYLIST_ID;
pub const PLAYLIST_NAME: &str = "M3U Playlist";
pub const PLAYLIST_POSTER: &str = "https://via.placeholder.com/150?text=Playlist";
