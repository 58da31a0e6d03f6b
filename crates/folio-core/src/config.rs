//! Site configuration
//!
//! A single JSON file describes the profile, the avatar rotation and the
//! galleries. When no file is given the default location
//! (`<config dir>/folio/site.json`) is tried, then the built-in demo site.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{FolioError, FolioResult};
use crate::gallery::GalleryTarget;
use crate::language::{Language, Locales};
use crate::profile::Profile;

/// A gallery with the id used to open it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub id: String,
    #[serde(flatten)]
    pub target: GalleryTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Prefix for relative image paths
    pub base_path: String,
    pub language: String,
    /// Site-wide UI strings
    pub strings: Locales,
    pub profile: Profile,
    pub avatar_images: Vec<String>,
    pub galleries: Vec<GalleryEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            language: crate::language::FALLBACK_LANGUAGE.to_string(),
            strings: Locales::new(),
            profile: Profile::default(),
            avatar_images: Vec::new(),
            galleries: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// `<config dir>/folio/site.json`, when the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("site.json"))
    }

    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> FolioResult<Self> {
        if !path.exists() {
            return Err(FolioError::ConfigNotFound(path.display().to_string()));
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::info!(path = %path.display(), galleries = config.galleries.len(), "site config loaded");
        Ok(config)
    }

    /// Explicit path must load; the default path may be absent.
    pub fn load_or_demo(explicit: Option<&Path>) -> FolioResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::info!("no site config found, using demo site");
                Ok(Self::demo())
            }
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        let mut seen = HashSet::new();
        for entry in &self.galleries {
            if entry.id.trim().is_empty() {
                return Err(FolioError::InvalidConfig("gallery with empty id".into()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(FolioError::InvalidConfig(format!(
                    "duplicate gallery id: {}",
                    entry.id
                )));
            }
        }
        Ok(())
    }

    pub fn gallery(&self, id: &str) -> FolioResult<&GalleryTarget> {
        self.galleries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.target)
            .ok_or_else(|| FolioError::GalleryNotFound(id.to_string()))
    }

    pub fn language(&self) -> Language {
        Language::new(self.language.clone(), self.strings.clone())
    }

    /// Built-in site used when nothing is configured
    pub fn demo() -> Self {
        let value = json!({
            "basePath": "assets",
            "language": "en",
            "strings": {
                "en": {
                    "error": "Error",
                    "error_file_not_found": "The file could not be found.",
                    "download_resume": "Download resume",
                    "open_gallery": "Open gallery"
                },
                "fr": {
                    "error": "Erreur",
                    "error_file_not_found": "Le fichier est introuvable.",
                    "download_resume": "Télécharger le CV",
                    "open_gallery": "Ouvrir la galerie"
                }
            },
            "profile": {
                "name": "Alex Martin",
                "locales": {
                    "en": {
                        "localized_name_stylized": "Alex <b>Martin</b>",
                        "roles": ["Software Engineer", "Photographer", "Open-source contributor"],
                        "status_available": "Available for new projects",
                        "name_pronunciation_ipa": "/ˈæl.ɪks mɑːʁ.tɛ̃/"
                    },
                    "fr": {
                        "roles": ["Ingénieur logiciel", "Photographe", "Contributeur open source"],
                        "status_available": "Disponible pour de nouveaux projets"
                    }
                },
                "profilePictureUrl": "images/pictures/profile-picture.jpg",
                "statusCircleVisible": true,
                "statusCircleVariant": "success",
                "statusCircleHoverMessage": "status_available"
            },
            "avatarImages": [
                "images/pictures/profile-picture.jpg",
                "images/pictures/profile-picture-2.jpg"
            ],
            "galleries": [
                {
                    "id": "mobile-app",
                    "title": "Mobile app",
                    "type": "portrait",
                    "images": ["images/gallery/app-1.png", "images/gallery/app-2.png", "images/gallery/app-3.png"]
                },
                {
                    "id": "dashboard",
                    "title": "Dashboard",
                    "type": "landscape",
                    "images": ["images/gallery/dash-1.png", "images/gallery/dash-2.png"]
                },
                {
                    "id": "travel",
                    "title": "Travel",
                    "images": ["images/gallery/l'été.jpg", "images/gallery/missing.jpg"]
                }
            ]
        });
        // Fixed literal, covered by test_demo_parses
        serde_json::from_value(value).unwrap_or_default()
    }
}
