use playlist_rs::format::{M3uPlaylist, PlaylistEntry};
use serde::Serialize;
use smol_str::{SmolStr, format_smolstr};

use crate::{
    catalog::{
        BINGE_GROUP, CONTENT_TYPE, PLAYLIST_ID, PLAYLIST_NAME, PLAYLIST_POSTER, STREAM_ID_PREFIX,
    },
    store::PlaylistSource,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaPreview {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub content_type: &'static str,
    pub name: &'static str,
    pub poster: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamDescriptor {
    pub title: SmolStr,
    pub url: SmolStr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<SmolStr>,
    pub behavior_hints: StreamBehaviorHints,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamBehaviorHints {
    pub binge_group: &'static str,
}

impl StreamDescriptor {
    fn from_entry(entry: &PlaylistEntry) -> Self {
        Self {
            title: entry.name.clone(),
            url: entry.location.clone(),
            external_url: None,
            behavior_hints: StreamBehaviorHints {
                binge_group: BINGE_GROUP,
            },
        }
    }
}

/// What a stream/meta id points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamAddress {
    Playlist,
    /// Position in the freshly parsed playlist; may be out of range
    Entry(i64),
    Invalid,
}

impl StreamAddress {
    pub fn parse(id: impl AsRef<str>) -> Self {
        let id = id.as_ref();
        if id == PLAYLIST_ID {
            return Self::Playlist;
        }

        match id.strip_prefix(STREAM_ID_PREFIX).map(str::parse::<i64>) {
            Some(Ok(index)) => Self::Entry(index),
            _ => Self::Invalid,
        }
    }

    /// Whether answering needs the playlist to be fetched at all
    pub fn needs_playlist(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

pub fn entry_id(index: usize) -> SmolStr {
    format_smolstr!("{}{}", STREAM_ID_PREFIX, index)
}

fn external_url(index: usize) -> SmolStr {
    format_smolstr!(
        "stremio:///detail/{}/{}/{}",
        CONTENT_TYPE,
        PLAYLIST_ID,
        entry_id(index)
    )
}

fn playlist_preview() -> MetaPreview {
    MetaPreview {
        id: PLAYLIST_ID,
        content_type: CONTENT_TYPE,
        name: PLAYLIST_NAME,
        poster: PLAYLIST_POSTER,
        description: None,
    }
}

/// The catalog never lists entries, only the playlist as a whole.
pub fn catalog_metas(source: &PlaylistSource) -> Vec<MetaPreview> {
    if !source.is_configured() {
        return Vec::new();
    }

    vec![playlist_preview()]
}

pub fn playlist_meta(source: &PlaylistSource, id: impl AsRef<str>) -> Option<MetaPreview> {
    if !source.is_configured() || id.as_ref() != PLAYLIST_ID {
        return None;
    }

    Some(MetaPreview {
        description: Some("All streams of the configured M3U playlist"),
        ..playlist_preview()
    })
}

pub fn project_streams(address: StreamAddress, playlist: &M3uPlaylist) -> Vec<StreamDescriptor> {
    match address {
        StreamAddress::Playlist => playlist
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| StreamDescriptor {
                external_url: Some(external_url(index)),
                ..StreamDescriptor::from_entry(entry)
            })
            .collect(),
        StreamAddress::Entry(index) => usize::try_from(index)
            .ok()
            .and_then(|index| playlist.get(index))
            .map(|entry| vec![StreamDescriptor::from_entry(entry)])
            .unwrap_or_default(),
        StreamAddress::Invalid => Vec::new(),
    }
}
