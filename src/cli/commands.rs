// file: src/cli/commands.rs
// version: 1.0.0
// guid: d2e3f4a5-b6c7-8901-2345-678901defabc

//! Command implementations for the CLI

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    config::{ConfigLoader, RunnerConfig},
    date::ReportDate,
    error::RunnerError,
    pipeline::{CommandInvoker, Pipeline},
    Result,
};

/// Resolve the effective configuration from file, environment and CLI flags.
///
/// Precedence: CLI flags beat environment variables beat the config file. A
/// missing config file is only an error when no base directory was given some
/// other way.
pub fn resolve_config(
    config_path: Option<&Path>,
    base_dir: Option<PathBuf>,
    interpreter: Option<PathBuf>,
) -> Result<RunnerConfig> {
    let loader = ConfigLoader::new();

    let mut config = if let Some(path) = config_path {
        loader.load(path)?
    } else if let Some(path) = ConfigLoader::discover_path() {
        info!("Using config file {}", path.display());
        loader.load(path)?
    } else if let Some(dir) = &base_dir {
        RunnerConfig::with_base_dir(dir.clone())
    } else {
        return Err(RunnerError::config(
            "no config file found; pass --config, set POSTER_CONFIG, or give --base-dir",
        ));
    };

    config.apply_overrides(base_dir, interpreter);
    Ok(config)
}

/// Run the full daily pipeline: import, then anomaly report
pub async fn run_command(
    config: &RunnerConfig,
    date: Option<&str>,
    skip_products_sales: bool,
    dry_run: bool,
) -> Result<()> {
    let date = ReportDate::resolve(date)?;
    config.validate()?;

    let include_products_sales = config.include_products_sales && !skip_products_sales;
    info!("Running daily pipeline for {}", date);

    let invoker = CommandInvoker::from_config(config, dry_run);
    Pipeline::daily(date, include_products_sales)
        .run(&invoker)
        .await?;

    info!("Daily pipeline for {} completed", date);
    Ok(())
}

/// Run only the daily import
pub async fn import_command(
    config: &RunnerConfig,
    date: Option<&str>,
    skip_products_sales: bool,
    dry_run: bool,
) -> Result<()> {
    let date = ReportDate::resolve(date)?;
    config.validate()?;

    let include_products_sales = config.include_products_sales && !skip_products_sales;
    let invoker = CommandInvoker::from_config(config, dry_run);
    Pipeline::import_only(date, include_products_sales)
        .run(&invoker)
        .await
}

/// Run only the anomaly report
pub async fn report_command(config: &RunnerConfig, date: Option<&str>, dry_run: bool) -> Result<()> {
    let date = ReportDate::resolve(date)?;
    config.validate()?;

    let invoker = CommandInvoker::from_config(config, dry_run);
    Pipeline::report_only(date).run(&invoker).await
}

/// Resolved configuration view reported by `check`
#[derive(Serialize)]
struct ConfigStatus {
    base_dir: PathBuf,
    interpreter: PathBuf,
    entrypoint: String,
    include_products_sales: bool,
    problems: Vec<String>,
}

/// Validate the configuration and resolved paths without invoking anything
pub async fn check_command(config: &RunnerConfig, json_output: bool) -> Result<()> {
    let interpreter = config.interpreter_path();
    let mut problems = Vec::new();

    if !config.base_dir.is_dir() {
        problems.push(format!(
            "base directory {} does not exist or is not a directory",
            config.base_dir.display()
        ));
    }

    if let Err(e) = which::which(&interpreter) {
        problems.push(format!(
            "interpreter {} is not usable: {}",
            interpreter.display(),
            e
        ));
    }

    let status = ConfigStatus {
        base_dir: config.base_dir.clone(),
        interpreter,
        entrypoint: config.entrypoint.clone(),
        include_products_sales: config.include_products_sales,
        problems,
    };

    if json_output {
        let json = serde_json::to_string_pretty(&status)?;
        println!("{}", json);
    } else {
        info!("base_dir: {}", status.base_dir.display());
        info!("interpreter: {}", status.interpreter.display());
        info!("entrypoint: {}", status.entrypoint);
        info!(
            "include_products_sales: {}",
            status.include_products_sales
        );
        for problem in &status.problems {
            warn!("{}", problem);
        }
    }

    if status.problems.is_empty() {
        info!("Configuration OK");
        Ok(())
    } else {
        Err(RunnerError::config(format!(
            "{} problem(s) found",
            status.problems.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_resolve_config_requires_some_source() {
        // No config file, no base dir: refuse rather than guess. Discovery
        // may still find a real user-level config on the machine running the
        // tests, in which case resolution legitimately succeeds.
        if ConfigLoader::discover_path().is_none() {
            let result = resolve_config(None, None, None);
            assert!(matches!(result, Err(RunnerError::Config(_))));
        }
    }

    #[test]
    fn test_resolve_config_from_base_dir_flag() {
        let dir = TempDir::new().unwrap();
        let config = resolve_config(None, Some(dir.path().to_path_buf()), None).unwrap();
        assert_eq!(config.base_dir, dir.path());
        assert!(config.include_products_sales);
    }

    #[test]
    fn test_resolve_config_flag_beats_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"base_dir = "/srv/from-file""#).unwrap();

        let config = resolve_config(
            Some(file.path()),
            Some(PathBuf::from("/srv/from-flag")),
            Some(PathBuf::from("/opt/python")),
        )
        .unwrap();

        assert_eq!(config.base_dir, PathBuf::from("/srv/from-flag"));
        assert_eq!(config.interpreter_path(), PathBuf::from("/opt/python"));
    }

    #[tokio::test]
    async fn test_run_command_rejects_bad_date_before_validation() {
        // The date error must surface even though the base dir is also bad,
        // mirroring the downstream commands' own argument checking.
        let config = RunnerConfig::with_base_dir(PathBuf::from("/nonexistent"));
        let err = run_command(&config, Some("03/15/2024"), false, false)
            .await
            .unwrap_err();
        assert!(matches!(err, RunnerError::Date(_)));
    }

    #[tokio::test]
    async fn test_run_command_missing_base_dir_fails_before_invocation() {
        let config = RunnerConfig::with_base_dir(PathBuf::from("/nonexistent/poster"));
        let err = run_command(&config, Some("2024-03-15"), false, false)
            .await
            .unwrap_err();
        assert!(matches!(err, RunnerError::Config(_)));
    }

    #[tokio::test]
    async fn test_check_command_reports_problems() {
        let config = RunnerConfig::with_base_dir(PathBuf::from("/nonexistent/poster"));
        let err = check_command(&config, false).await.unwrap_err();
        assert!(err.to_string().contains("problem(s) found"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_check_command_ok_with_valid_paths() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let interpreter = dir.path().join("python");
        std::fs::write(&interpreter, "#!/bin/sh\n").unwrap();
        let mut perms = std::fs::metadata(&interpreter).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&interpreter, perms).unwrap();

        let mut config = RunnerConfig::with_base_dir(dir.path().to_path_buf());
        config.interpreter = Some(interpreter);

        assert!(check_command(&config, true).await.is_ok());
    }
}
