//! Build-time configuration for the push registration procedure.
//!
//! The project identifier scoping token issuance can live in two places in
//! the app manifest: the primary `extra.eas.project_id` entry written by the
//! build tooling, or a top-level `project_id` fallback. First one found wins.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Build-time app manifest, loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppManifest {
    /// Extra configuration written by build tooling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<ManifestExtra>,
    /// Fallback project identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// The `extra` table of the manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestExtra {
    /// Build-service configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eas: Option<EasConfig>,
}

/// Build-service section carrying the primary project identifier
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EasConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Get the default manifest location (`~/.push-session/manifest.toml`)
pub fn default_manifest_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".push-session")
        .join("manifest.toml")
}

impl AppManifest {
    /// Load a manifest from an explicit path. Missing file is an error.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read manifest {}: {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse manifest {}: {}", path.display(), e))
    }

    /// Load the manifest from the default location, falling back to an empty
    /// manifest when the file does not exist.
    pub fn load_default() -> Result<Self, String> {
        let path = default_manifest_path();
        if !path.exists() {
            log::debug!("No manifest at {}, using empty manifest", path.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Resolve the project identifier: `extra.eas.project_id` first, then the
    /// top-level `project_id`. Empty strings count as absent.
    pub fn resolve_project_id(&self) -> Option<&str> {
        self.extra
            .as_ref()
            .and_then(|extra| extra.eas.as_ref())
            .and_then(|eas| eas.project_id.as_deref())
            .filter(|id| !id.is_empty())
            .or_else(|| {
                self.project_id
                    .as_deref()
                    .filter(|id| !id.is_empty())
            })
    }

    /// Convenience constructor for a manifest carrying only the primary id
    pub fn with_eas_project_id(project_id: impl Into<String>) -> Self {
        Self {
            extra: Some(ManifestExtra {
                eas: Some(EasConfig {
                    project_id: Some(project_id.into()),
                }),
            }),
            project_id: None,
        }
    }
}
