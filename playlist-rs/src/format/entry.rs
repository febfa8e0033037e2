use std::collections::HashMap;

use smol_str::SmolStr;

use crate::format::DEFAULT_NAME;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    /// Display name, never empty
    pub name: SmolStr,
    /// Absolute http(s) location of the media
    pub location: SmolStr,
    /// Duration declared by `#EXTINF`, if it was a number
    pub duration: Option<f32>,
    /// Quoted attributes declared by `#EXTINF`, e.g. `tvg-logo`
    pub attributes: HashMap<SmolStr, SmolStr>,
}

impl PlaylistEntry {
    pub fn new(name: impl Into<SmolStr>, location: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            duration: None,
            attributes: HashMap::new(),
        }
    }

    pub fn attribute(&self, key: impl AsRef<str>) -> Option<&str> {
        self.attributes.get(key.as_ref()).map(|x| x.as_str())
    }
}

impl Default for PlaylistEntry {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, "")
    }
}
