use smol_str::SmolStr;
use std::collections::HashMap;

use crate::format::PlaylistEntry;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct M3uPlaylist {
    /// Attributes of the `#EXTM3U` header, if there was one
    pub attributes: HashMap<SmolStr, SmolStr>,
    /// Entries in source order
    pub entries: Vec<PlaylistEntry>,
}

impl M3uPlaylist {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlaylistEntry> {
        self.entries.get(index)
    }
}
