mod entry;
mod playlist;
pub use entry::*;
pub use playlist::*;

/// Name given to an entry whose location had no `#EXTINF` line before it
pub const DEFAULT_NAME: &str = "Stream";

pub mod directives {
    pub const EXTM3U: &str = "#EXTM3U";
    pub const EXTM3U_LEN: usize = EXTM3U.len();
    pub const EXTINF: &str = "#EXTINF:";
    pub const COMMENT: char = '#';
}
