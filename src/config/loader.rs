// file: src/config/loader.rs
// version: 1.0.0
// guid: d6e7f8a9-b0c1-2345-6789-012345defabc

//! Configuration file loading and environment variable substitution

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use super::{expand_tilde, RunnerConfig};
use crate::error::{Result, RunnerError};

/// Default config file locations, relative to the home directory
const CONFIG_SUBPATH: &str = ".config/poster-daily-runner/config.toml";
const DOTFILE_NAME: &str = ".poster-daily-runner.toml";

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader seeded from the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load the runner configuration from a TOML file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<RunnerConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            RunnerError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        let mut config: RunnerConfig = toml::from_str(&expanded).map_err(|e| {
            RunnerError::config(format!(
                "Failed to parse config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.base_dir = expand_tilde(&config.base_dir);
        if let Some(interpreter) = config.interpreter.take() {
            config.interpreter = Some(expand_tilde(&interpreter));
        }

        Ok(config)
    }

    /// Find the first default config file that exists on disk
    pub fn discover_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        let candidates = [home.join(CONFIG_SUBPATH), home.join(DOTFILE_NAME)];
        candidates.into_iter().find(|path| path.is_file())
    }

    /// Expand `${VAR}` references in configuration content.
    ///
    /// A reference to an unset variable is fatal, never silently emptied.
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| RunnerError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(RunnerError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_env_var_expansion() {
        let mut loader = ConfigLoader::new();
        loader.set_env_var("TEST_VAR".to_string(), "test_value".to_string());

        let content = "key = \"${TEST_VAR}\"";
        let result = loader.expand_env_vars(content).unwrap();
        assert_eq!(result, "key = \"test_value\"");
    }

    #[test]
    fn test_missing_env_var() {
        let loader = ConfigLoader::new();
        let content = "key = \"${PDR_DEFINITELY_MISSING_VAR}\"";

        let result = loader.expand_env_vars(content);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Missing environment variables"));
    }

    #[test]
    fn test_load_config() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
base_dir = "/srv/poster-reports"
entrypoint = "manage.py"
include_products_sales = false
"#
        )
        .unwrap();

        let loader = ConfigLoader::new();
        let config = loader.load(file.path())?;

        assert_eq!(config.base_dir, PathBuf::from("/srv/poster-reports"));
        assert_eq!(config.entrypoint, "manage.py");
        assert!(!config.include_products_sales);
        assert_eq!(
            config.interpreter_path(),
            PathBuf::from("/srv/poster-reports/.venv/bin/python")
        );

        Ok(())
    }

    #[test]
    fn test_load_config_with_env_substitution() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"base_dir = "${{PDR_TEST_BASE}}/app""#).unwrap();

        let mut loader = ConfigLoader::new();
        loader.set_env_var("PDR_TEST_BASE".to_string(), "/srv".to_string());

        let config = loader.load(file.path())?;
        assert_eq!(config.base_dir, PathBuf::from("/srv/app"));

        Ok(())
    }

    #[test]
    fn test_load_config_missing_env_var_is_fatal() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"base_dir = "${{PDR_UNSET_BASE_DIR}}""#).unwrap();

        let loader = ConfigLoader::new();
        let result = loader.load(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_dir = [not toml").unwrap();

        let loader = ConfigLoader::new();
        let err = loader.load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_missing_file() {
        let loader = ConfigLoader::new();
        let err = loader.load("/nonexistent/config.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_tilde_expansion_in_paths() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
base_dir = "~/poster-reports"
interpreter = "~/poster-reports/.venv/bin/python"
"#
        )
        .unwrap();

        let loader = ConfigLoader::new();
        let config = loader.load(file.path())?;

        assert!(!config.base_dir.to_string_lossy().starts_with('~'));
        assert!(!config
            .interpreter_path()
            .to_string_lossy()
            .starts_with('~'));

        Ok(())
    }
}
