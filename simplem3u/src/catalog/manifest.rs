use serde::Serialize;

use crate::catalog::{CATALOG_ID, CONTENT_TYPE, ID_PREFIX, PLAYLIST_NAME};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: &'static str,
    pub version: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub resources: Vec<&'static str>,
    pub types: Vec<&'static str>,
    pub catalogs: Vec<CatalogDeclaration>,
    pub id_prefixes: Vec<&'static str>,
    pub behavior_hints: ManifestBehaviorHints,
}

#[derive(Debug, Serialize)]
pub struct CatalogDeclaration {
    #[serde(rename = "type")]
    pub content_type: &'static str,
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Default, Serialize)]
pub struct ManifestBehaviorHints {}

pub fn manifest() -> Manifest {
    Manifest {
        id: "sidh3369.simplem3u",
        version: env!("CARGO_PKG_VERSION"),
        name: "SimpleM3U",
        description: "Play M3U playlists in Stremio",
        resources: vec!["catalog", "meta", "stream"],
        types: vec![CONTENT_TYPE],
        catalogs: vec![CatalogDeclaration {
            content_type: CONTENT_TYPE,
            id: CATALOG_ID,
            name: PLAYLIST_NAME,
        }],
        id_prefixes: vec![ID_PREFIX],
        behavior_hints: ManifestBehaviorHints::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_shape() {
        let value = serde_json::to_value(manifest()).unwrap();
        assert_eq!(value["id"], "sidh3369.simplem3u");
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["resources"], serde_json::json!(["catalog", "meta", "stream"]));
        assert_eq!(value["types"], serde_json::json!(["movie"]));
        assert_eq!(value["catalogs"][0]["type"], "movie");
        assert_eq!(value["catalogs"][0]["id"], "m3u_catalog");
        assert_eq!(value["idPrefixes"], serde_json::json!(["m3u_"]));
        assert_eq!(value["behaviorHints"], serde_json::json!({}));
    }
}
