mod playlist_store;
mod source;
pub use playlist_store::*;
pub use source::*;
