use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::record::CatalogKind;

pub const MANIFEST_VERSION: &str = "1.0";

/// Declares which catalog files a run loads and how each is rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogManifest {
    pub version: String,
    pub catalogs: Vec<CatalogSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogSource {
    pub id: String,
    /// Catalog file path, relative to the manifest's directory.
    pub path: String,
    pub kind: CatalogKind,
    /// Uniform visual scale applied to every instanced object.
    #[serde(default = "default_point_scale")]
    pub point_scale: f64,
    /// Reference sphere radius for angle-only catalogs. Redshift catalogs
    /// derive their radius per point from the Hubble law instead.
    #[serde(default = "default_sphere_radius")]
    pub sphere_radius: f64,
}

fn default_point_scale() -> f64 {
    0.1
}

fn default_sphere_radius() -> f64 {
    50.0
}

impl CatalogManifest {
    pub fn new() -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            catalogs: Vec::new(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(json).map_err(ManifestError::Parse)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&text)
    }
}

impl Default for CatalogManifest {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum ManifestError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Io { path, source } => {
                write!(f, "failed to read manifest {}: {source}", path.display())
            }
            ManifestError::Parse(e) => write!(f, "failed to parse manifest: {e}"),
        }
    }
}

impl std::error::Error for ManifestError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CatalogManifest, CatalogSource, MANIFEST_VERSION};
    use crate::record::CatalogKind;

    #[test]
    fn round_trips_through_json() {
        let mut manifest = CatalogManifest::new();
        manifest.catalogs.push(CatalogSource {
            id: "arcmin_100k".to_string(),
            path: "data_100k_arcmin.txt".to_string(),
            kind: CatalogKind::AngleOnly,
            point_scale: 0.1,
            sphere_radius: 50.0,
        });

        let json = serde_json::to_string(&manifest).unwrap();
        let parsed = CatalogManifest::from_json_str(&json).unwrap();
        assert_eq!(parsed, manifest);
        assert_eq!(parsed.version, MANIFEST_VERSION);
    }

    #[test]
    fn scale_and_radius_default_when_omitted() {
        let json = r#"{
            "version": "1.0",
            "catalogs": [
                {"id": "survey", "path": "survey.txt", "kind": "redshift_sexagesimal"}
            ]
        }"#;
        let manifest = CatalogManifest::from_json_str(json).unwrap();
        assert_eq!(manifest.catalogs[0].kind, CatalogKind::RedshiftSexagesimal);
        assert_eq!(manifest.catalogs[0].point_scale, 0.1);
        assert_eq!(manifest.catalogs[0].sphere_radius, 50.0);
    }

    #[test]
    fn rejects_unknown_kind() {
        let json = r#"{
            "version": "1.0",
            "catalogs": [{"id": "x", "path": "x.txt", "kind": "parallax"}]
        }"#;
        assert!(CatalogManifest::from_json_str(json).is_err());
    }
}
