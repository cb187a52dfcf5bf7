//! Controller configuration
//!
//! Settings that shape how a [`PaginationController`](crate::controller::PaginationController)
//! behaves. Loadable from YAML or JSON.

use crate::controller::StaleResponsePolicy;
use crate::engine::ErrorPolicy;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a pagination controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Items requested per page
    pub page_limit: usize,
    /// Fetch the first page when the controller starts
    pub load_first_page_on_init: bool,
    /// What a failed fetch does to the visible items
    pub error_policy: ErrorPolicy,
    /// What to do with responses overtaken by a newer fetch
    pub stale_responses: StaleResponsePolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            page_limit: 20,
            load_first_page_on_init: true,
            error_policy: ErrorPolicy::default(),
            stale_responses: StaleResponsePolicy::default(),
        }
    }
}

impl ControllerConfig {
    /// Create a new controller config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page limit
    #[must_use]
    pub fn with_page_limit(mut self, limit: usize) -> Self {
        self.page_limit = limit;
        self
    }

    /// Set whether to load the first page on start
    #[must_use]
    pub fn with_load_first_page_on_init(mut self, load: bool) -> Self {
        self.load_first_page_on_init = load;
        self
    }

    /// Set error policy
    #[must_use]
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Set stale response policy
    #[must_use]
    pub fn with_stale_responses(mut self, policy: StaleResponsePolicy) -> Self {
        self.stale_responses = policy;
        self
    }

    /// Parse a config from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; `.json` files are read as JSON, anything else as
    /// YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&contents),
            _ => Self::from_yaml(&contents),
        }
    }

    /// Check the config for invalid values
    pub fn validate(&self) -> Result<()> {
        if self.page_limit == 0 {
            return Err(Error::invalid_value("page_limit", "must be greater than 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = ControllerConfig::default();
        assert_eq!(config.page_limit, 20);
        assert!(config.load_first_page_on_init);
        assert_eq!(config.error_policy, ErrorPolicy::DiscardItems);
        assert_eq!(config.stale_responses, StaleResponsePolicy::Apply);
    }

    #[test]
    fn test_config_builder() {
        let config = ControllerConfig::new()
            .with_page_limit(50)
            .with_load_first_page_on_init(false)
            .with_error_policy(ErrorPolicy::RetainItems)
            .with_stale_responses(StaleResponsePolicy::Discard);

        assert_eq!(config.page_limit, 50);
        assert!(!config.load_first_page_on_init);
        assert_eq!(config.error_policy, ErrorPolicy::RetainItems);
        assert_eq!(config.stale_responses, StaleResponsePolicy::Discard);
    }

    #[test]
    fn test_config_from_yaml_partial() {
        let config = ControllerConfig::from_yaml(
            r"
page_limit: 5
error_policy: retain_items
",
        )
        .unwrap();

        assert_eq!(config.page_limit, 5);
        assert_eq!(config.error_policy, ErrorPolicy::RetainItems);
        assert!(config.load_first_page_on_init);
        assert_eq!(config.stale_responses, StaleResponsePolicy::Apply);
    }

    #[test]
    fn test_config_from_json() {
        let config = ControllerConfig::from_json(
            r#"{"load_first_page_on_init": false, "stale_responses": "discard"}"#,
        )
        .unwrap();

        assert!(!config.load_first_page_on_init);
        assert_eq!(config.stale_responses, StaleResponsePolicy::Discard);
        assert_eq!(config.page_limit, 20);
    }

    #[test]
    fn test_config_rejects_zero_limit() {
        let err = ControllerConfig::from_yaml("page_limit: 0").unwrap_err();
        match err {
            Error::InvalidConfigValue { field, .. } => assert_eq!(field, "page_limit"),
            other => panic!("Expected InvalidConfigValue, got {other:?}"),
        }
    }

    #[test]
    fn test_config_rejects_unknown_policy() {
        let err = ControllerConfig::from_yaml("error_policy: keep_everything").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("pager.yaml");
        let mut file = std::fs::File::create(&yaml_path).unwrap();
        writeln!(file, "page_limit: 7").unwrap();
        assert_eq!(ControllerConfig::from_file(&yaml_path).unwrap().page_limit, 7);

        let json_path = dir.path().join("pager.json");
        std::fs::write(&json_path, r#"{"page_limit": 9}"#).unwrap();
        assert_eq!(ControllerConfig::from_file(&json_path).unwrap().page_limit, 9);

        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            ControllerConfig::from_file(&missing),
            Err(Error::FileNotFound { .. })
        ));
    }
}
