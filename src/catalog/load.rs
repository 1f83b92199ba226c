use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use super::item::{CatalogItem, Contributor};
use crate::error::CatalogError;
use crate::media::embed_from_watch;

/// Default dataset compiled into the binary. A replacement file with the
/// same shape can be supplied via config or `--catalog`.
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.json");

/// The authored universe of selectable activities plus the people they
/// come from. Loaded once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Catalog {
    #[serde(default)]
    pub contributors: Vec<Contributor>,

    pub items: Vec<CatalogItem>,
}

impl Catalog {
    /// Load the compiled-in default dataset.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load a replacement dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let catalog = Self::from_json(&content)?;
        debug!(
            "Loaded catalog from {}: {} items, {} contributors",
            path.display(),
            catalog.items.len(),
            catalog.contributors.len()
        );
        Ok(catalog)
    }

    fn from_json(content: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = serde_json::from_str(content)?;
        catalog.validate()?;
        catalog.normalize_media();
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        if !self.contributors.is_empty() {
            let known: HashSet<&str> = self.contributors.iter().map(|c| c.id.as_str()).collect();
            for item in &self.items {
                if !known.contains(item.contributor.as_str()) {
                    return Err(CatalogError::UnknownContributor {
                        item: item.id.clone(),
                        contributor: item.contributor.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Authored media references are watch-style URLs; store the
    /// embeddable form the presentation layer expects.
    fn normalize_media(&mut self) {
        for item in &mut self.items {
            if let Some(media) = &item.media {
                item.media = Some(embed_from_watch(media));
            }
        }
        for contributor in &mut self.contributors {
            if let Some(media) = &contributor.media {
                contributor.media = Some(embed_from_watch(media));
            }
        }
    }

    pub fn contributor(&self, id: &str) -> Option<&Contributor> {
        self.contributors.iter().find(|c| c.id == id)
    }

    pub fn item(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.id == id)
    }
}
