use std::fmt::Display;

use smol_str::SmolStr;

/// Location of the configured playlist. Empty means nothing is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistSource(SmolStr);

impl PlaylistSource {
    pub fn new(location: impl Into<SmolStr>) -> Self {
        Self(location.into())
    }

    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn is_configured(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlaylistSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
