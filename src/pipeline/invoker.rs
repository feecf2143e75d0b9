// file: src/pipeline/invoker.rs
// version: 1.0.0
// guid: f8a9b0c1-d2e3-4567-8901-234567fabcde

//! Child-process invocation of the managed application's commands

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use super::PipelineStep;
use crate::config::RunnerConfig;
use crate::error::{Result, RunnerError};

/// Invokes management commands through the configured interpreter.
///
/// Every invocation runs `<interpreter> <entrypoint> <operation> <args...>`
/// with the base directory as its working directory and stdio inherited, so
/// downstream diagnostics reach the caller's streams unmodified. The child is
/// awaited synchronously; there is no timeout and no retry here, that policy
/// belongs to whatever schedules the runner.
pub struct CommandInvoker {
    base_dir: PathBuf,
    interpreter: PathBuf,
    entrypoint: String,
    dry_run: bool,
}

impl CommandInvoker {
    /// Build an invoker from a validated configuration
    pub fn from_config(config: &RunnerConfig, dry_run: bool) -> Self {
        Self {
            base_dir: config.base_dir.clone(),
            interpreter: config.interpreter_path(),
            entrypoint: config.entrypoint.clone(),
            dry_run,
        }
    }

    /// Invoke a single step, mapping a non-zero exit into a step error
    pub async fn invoke(&self, step: &PipelineStep) -> Result<()> {
        info!(
            "Invoking {} with args: {}",
            step.operation,
            step.args.join(" ")
        );

        if self.dry_run {
            info!(
                "DRY RUN: Would execute: {} {} {} {}",
                self.interpreter.display(),
                self.entrypoint,
                step.operation,
                step.args.join(" ")
            );
            return Ok(());
        }

        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(&self.entrypoint)
            .arg(step.operation)
            .args(&step.args)
            .current_dir(&self.base_dir)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        debug!(
            "Spawning {} in {}",
            self.interpreter.display(),
            self.base_dir.display()
        );

        let status = cmd.status().await.map_err(|e| {
            RunnerError::execution(format!(
                "Failed to spawn {} for step {}: {}",
                self.interpreter.display(),
                step.operation,
                e
            ))
        })?;

        if !status.success() {
            return Err(RunnerError::step(step.operation, status.code()));
        }

        info!("Step {} completed successfully", step.operation);
        Ok(())
    }
}
