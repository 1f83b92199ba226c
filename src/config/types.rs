use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    /// Replacement catalog file; the compiled-in dataset is used when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ExportConfig {
    /// Filename the download sink writes
    #[serde(default = "default_export_filename")]
    pub filename: PathBuf,

    /// Title at the head of the rendered document
    #[serde(default = "default_export_title")]
    pub title: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: default_export_filename(),
            title: default_export_title(),
        }
    }
}
