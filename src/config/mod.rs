// file: src/config/mod.rs
// version: 1.0.0
// guid: c5d6e7f8-a9b0-1234-5678-901234cdefab

//! Configuration module for the daily pipeline runner
//!
//! Handles loading and validation of the runner configuration: where the
//! managed application lives and how its management commands are invoked.

pub mod loader;

pub use loader::ConfigLoader;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RunnerError};

/// Interpreter location inside the application's virtual environment,
/// relative to the base directory
const DEFAULT_INTERPRETER_SUBPATH: &str = ".venv/bin/python";

/// Entrypoint script the interpreter runs to reach the management commands
const DEFAULT_ENTRYPOINT: &str = "manage.py";

/// Runner configuration resolved from file, environment and CLI flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Directory containing the managed application; every operation runs
    /// with this as its working directory
    pub base_dir: PathBuf,

    /// Interpreter executable; defaults to `<base_dir>/.venv/bin/python`
    #[serde(default)]
    pub interpreter: Option<PathBuf>,

    /// Script passed to the interpreter ahead of the operation name
    #[serde(default = "default_entrypoint")]
    pub entrypoint: String,

    /// Whether the import operation also fetches product-sales data
    #[serde(default = "default_include_products_sales")]
    pub include_products_sales: bool,
}

fn default_entrypoint() -> String {
    DEFAULT_ENTRYPOINT.to_string()
}

fn default_include_products_sales() -> bool {
    true
}

impl RunnerConfig {
    /// Build a configuration from just a base directory, using defaults for
    /// everything else
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            interpreter: None,
            entrypoint: default_entrypoint(),
            include_products_sales: default_include_products_sales(),
        }
    }

    /// The interpreter to invoke, resolving the venv default
    pub fn interpreter_path(&self) -> PathBuf {
        match &self.interpreter {
            Some(path) => path.clone(),
            None => self.base_dir.join(DEFAULT_INTERPRETER_SUBPATH),
        }
    }

    /// Apply CLI/environment overrides on top of the loaded values
    pub fn apply_overrides(&mut self, base_dir: Option<PathBuf>, interpreter: Option<PathBuf>) {
        if let Some(dir) = base_dir {
            self.base_dir = expand_tilde(&dir);
        }
        if let Some(path) = interpreter {
            self.interpreter = Some(expand_tilde(&path));
        }
    }

    /// Validate the configuration before anything is invoked.
    ///
    /// The base directory must exist and be a directory, and the interpreter
    /// must exist and be executable. Runs ahead of every pipeline so a broken
    /// setup never reaches the first operation.
    pub fn validate(&self) -> Result<()> {
        if !self.base_dir.is_dir() {
            return Err(RunnerError::config(format!(
                "base directory {} does not exist or is not a directory",
                self.base_dir.display()
            )));
        }

        let interpreter = self.interpreter_path();
        if !interpreter.is_file() {
            return Err(RunnerError::config(format!(
                "interpreter {} does not exist",
                interpreter.display()
            )));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&interpreter)?.permissions().mode();
            if mode & 0o111 == 0 {
                return Err(RunnerError::config(format!(
                    "interpreter {} is not executable",
                    interpreter.display()
                )));
            }
        }

        Ok(())
    }
}

/// Expand a leading `~` in a path
pub(crate) fn expand_tilde(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
