mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use std::path::Path;
use tracing::debug;

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file; an absent file yields the defaults
    /// so the tool runs with zero setup.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load_or_default(Path::new("/nonexistent/smorg.yaml")).unwrap();
        assert!(config.catalog.is_none());
        assert_eq!(config.export.title, "Smorgasbord Plan");
        assert_eq!(
            config.export.filename,
            std::path::PathBuf::from("smorgasbord-plan.doc")
        );
    }

    #[test]
    fn test_yaml_overrides_apply() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "catalog: my-catalog.json\nexport:\n  title: Campus Plan"
        )
        .unwrap();

        let config = Config::load_or_default(file.path()).unwrap();
        assert_eq!(
            config.catalog,
            Some(std::path::PathBuf::from("my-catalog.json"))
        );
        assert_eq!(config.export.title, "Campus Plan");
        // Unset field keeps its default
        assert_eq!(
            config.export.filename,
            std::path::PathBuf::from("smorgasbord-plan.doc")
        );
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "export: [not, a, map]").unwrap();
        let err = Config::load_or_default(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
