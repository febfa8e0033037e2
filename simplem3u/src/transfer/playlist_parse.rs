use bytes::Bytes;
use playlist_rs::format::M3uPlaylist;
use tokio::task::JoinError;

/// Scans a downloaded playlist on the blocking pool. Invalid UTF-8 is
/// replaced rather than rejected.
pub async fn parse_playlist_async(data: Bytes) -> Result<M3uPlaylist, JoinError> {
    tokio::task::spawn_blocking(move || playlist_rs::parse_str(String::from_utf8_lossy(&data)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parse_lossy() {
        let mut data = b"#EXTINF:-1,Caf".to_vec();
        data.push(0xE9);
        data.extend_from_slice(b"\nhttp://a.test/1\n");

        let playlist = parse_playlist_async(Bytes::from(data)).await.unwrap();
        assert_eq!(playlist.len(), 1);
        assert_eq!(playlist.entries[0].name, "Caf\u{FFFD}");
    }
}
