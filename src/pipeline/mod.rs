// file: src/pipeline/mod.rs
// version: 1.0.0
// guid: e7f8a9b0-c1d2-3456-7890-123456efabcd

//! Daily pipeline definition and sequential execution
//!
//! The pipeline is a fixed, ordered list of operations against the managed
//! application. Execution is strictly sequential and fail-fast: a step is
//! started only after every step before it has exited zero, and the first
//! failure aborts the run with no retry.

pub mod invoker;

pub use invoker::CommandInvoker;

use tracing::info;

use crate::date::ReportDate;
use crate::error::Result;
use crate::logging::logger::with_async_operation_span;

/// Management command that ingests the day's Poster data
pub const IMPORT_OPERATION: &str = "poster_import_daily";

/// Management command that scans the imported day for anomalies
pub const REPORT_OPERATION: &str = "report_anomalies";

/// One operation invocation: the management command name and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStep {
    pub operation: &'static str,
    pub args: Vec<String>,
}

impl PipelineStep {
    /// The daily import, optionally including product-sales data
    pub fn import(date: ReportDate, include_products_sales: bool) -> Self {
        let mut args = vec!["--date".to_string(), date.to_string()];
        if include_products_sales {
            args.push("--include-products-sales".to_string());
        }
        Self {
            operation: IMPORT_OPERATION,
            args,
        }
    }

    /// The anomaly scan over the imported day
    pub fn report(date: ReportDate) -> Self {
        Self {
            operation: REPORT_OPERATION,
            args: vec!["--date".to_string(), date.to_string()],
        }
    }
}

/// An ordered run of pipeline steps
pub struct Pipeline {
    steps: Vec<PipelineStep>,
}

impl Pipeline {
    /// The full daily pipeline: import, then anomaly report
    pub fn daily(date: ReportDate, include_products_sales: bool) -> Self {
        Self {
            steps: vec![
                PipelineStep::import(date, include_products_sales),
                PipelineStep::report(date),
            ],
        }
    }

    /// Import step only
    pub fn import_only(date: ReportDate, include_products_sales: bool) -> Self {
        Self {
            steps: vec![PipelineStep::import(date, include_products_sales)],
        }
    }

    /// Anomaly-report step only
    pub fn report_only(date: ReportDate) -> Self {
        Self {
            steps: vec![PipelineStep::report(date)],
        }
    }

    /// The steps in execution order
    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    /// Run every step in order, aborting on the first failure
    pub async fn run(&self, invoker: &CommandInvoker) -> Result<()> {
        for step in &self.steps {
            with_async_operation_span(step.operation, || invoker.invoke(step)).await?;
        }
        info!("Pipeline completed: {} step(s)", self.steps.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> ReportDate {
        ReportDate::parse("2024-03-15").unwrap()
    }

    #[test]
    fn test_import_step_args_with_products_sales() {
        let step = PipelineStep::import(date(), true);
        assert_eq!(step.operation, "poster_import_daily");
        assert_eq!(
            step.args,
            vec!["--date", "2024-03-15", "--include-products-sales"]
        );
    }

    #[test]
    fn test_import_step_args_without_products_sales() {
        let step = PipelineStep::import(date(), false);
        assert_eq!(step.args, vec!["--date", "2024-03-15"]);
    }

    #[test]
    fn test_report_step_args() {
        let step = PipelineStep::report(date());
        assert_eq!(step.operation, "report_anomalies");
        assert_eq!(step.args, vec!["--date", "2024-03-15"]);
    }

    #[test]
    fn test_daily_pipeline_orders_import_before_report() {
        let pipeline = Pipeline::daily(date(), true);
        let operations: Vec<_> = pipeline.steps().iter().map(|s| s.operation).collect();
        assert_eq!(operations, vec!["poster_import_daily", "report_anomalies"]);
    }

    #[test]
    fn test_both_steps_share_the_same_date() {
        let pipeline = Pipeline::daily(date(), false);
        for step in pipeline.steps() {
            assert!(step.args.contains(&"2024-03-15".to_string()));
        }
    }

    #[test]
    fn test_single_step_pipelines() {
        assert_eq!(Pipeline::import_only(date(), true).steps().len(), 1);
        assert_eq!(Pipeline::report_only(date()).steps().len(), 1);
    }
}
