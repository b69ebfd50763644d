//! Core library for validating parameter passing across an Azure Data
//! Factory source tree.
//!
//! A factory export keeps each pipeline and trigger as one JSON file under
//! `pipeline/` and `trigger/`. Pipelines invoke other pipelines through
//! `ExecutePipeline` activities, and triggers start pipelines through
//! bindings; both carry a parameter object for the target. This crate
//! checks those call sites statically: every declared parameter without a
//! default must be supplied, and a supplied value equal to the declared
//! default is flagged as redundant.
//!
//! The flow has three stages. [`loader`] builds name-keyed indexes from
//! the resource files; [`checker`] resolves every invocation against those
//! indexes and computes findings; [`report`] renders them for stdout.
//! [`resource`] holds the deserialized shapes and [`issue`] the finding
//! vocabulary.

use std::path::Path;

pub mod checker;
pub mod error;
pub mod issue;
pub mod loader;
pub mod report;
pub mod resource;
pub mod telemetry;

pub use checker::check_factory;
pub use error::{ResourceError, Result};
pub use issue::{Issue, IssueCategory};
pub use loader::load_factory;
pub use report::ValidationReport;
pub use resource::ResourceKind;
pub use telemetry::init_tracing;

/// Crate version, from the workspace manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load a factory tree and run every check, producing the final report.
///
/// Unusable resource files have already been logged and skipped by the
/// loader; this function never fails, it only reports.
pub fn validate_factory(root: &Path) -> ValidationReport {
    let (pipelines, triggers) = loader::load_factory(root);
    ValidationReport::new(checker::check_factory(&pipelines, &triggers))
}
