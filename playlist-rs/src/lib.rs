//! # playlist-rs
//! A lenient scanner for M3U playlists
//!
//! Only `http`/`https` locations become entries; the display name of each
//! entry comes from the `#EXTINF` line above it.
//!
//! # Example
//! ```rust
//! use playlist_rs::Parser;
//! use std::io::Cursor;
//!
//! let mut parser = Parser::new(Cursor::new(r#"
//! #EXTM3U x-tvg-url="test"
//! #EXTINF:-1 tvg-id="a" group-title="News",A
//! http://example.com/A.m3u8
//! http://example.com/B.m3u8"#));
//! parser.parse().unwrap();
//! let result = parser.get_result();
//!
//! assert_eq!(result.entries[0].name, "A");
//! assert_eq!(result.entries[1].name, "Stream");
//! ```

pub mod format;
mod parser;
pub use parser::*;
