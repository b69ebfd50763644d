//! Validation findings.
//!
//! Findings are the product of a run, never error values: the checker
//! emits them, the reporter renders them, and nothing in between is
//! allowed to reorder or rewrite them.

use serde::{Deserialize, Serialize};

use crate::resource::ResourceKind;

/// Category of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// The referenced pipeline does not exist in the index.
    UnresolvedReference,
    /// Declared no-default parameters not supplied at the call site.
    MissingRequiredParameters,
    /// Supplied parameters whose values equal the callee's defaults.
    RedundantDefaultParameters,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Kind of the document the finding is reported under.
    pub subject_kind: ResourceKind,

    /// Name of that document, used as the report group header.
    pub subject_name: String,

    /// Call site: activity name for pipeline subjects, trigger name for
    /// trigger subjects.
    pub site_name: String,

    pub category: IssueCategory,

    /// The referenced pipeline the finding is about.
    pub target: String,

    /// Affected parameter names in declaration order; empty for
    /// unresolved references.
    pub parameters: Vec<String>,
}

impl Issue {
    /// Finding for a reference that resolves to no known pipeline.
    pub fn unresolved(
        subject_kind: ResourceKind,
        subject_name: &str,
        site_name: &str,
        target: &str,
    ) -> Self {
        Issue {
            subject_kind,
            subject_name: subject_name.to_string(),
            site_name: site_name.to_string(),
            category: IssueCategory::UnresolvedReference,
            target: target.to_string(),
            parameters: Vec::new(),
        }
    }

    /// Finding carrying the full list of unsupplied required parameters.
    pub fn missing(
        subject_kind: ResourceKind,
        subject_name: &str,
        site_name: &str,
        target: &str,
        parameters: Vec<String>,
    ) -> Self {
        Issue {
            subject_kind,
            subject_name: subject_name.to_string(),
            site_name: site_name.to_string(),
            category: IssueCategory::MissingRequiredParameters,
            target: target.to_string(),
            parameters,
        }
    }

    /// Finding carrying the full list of default-matching parameters.
    pub fn redundant(
        subject_kind: ResourceKind,
        subject_name: &str,
        site_name: &str,
        target: &str,
        parameters: Vec<String>,
    ) -> Self {
        Issue {
            subject_kind,
            subject_name: subject_name.to_string(),
            site_name: site_name.to_string(),
            category: IssueCategory::RedundantDefaultParameters,
            target: target.to_string(),
            parameters,
        }
    }

    /// One report line for this finding.
    ///
    /// Pipeline subjects name the offending activity; trigger subjects
    /// name the bound pipeline instead, since the trigger itself is the
    /// group header and bindings have no name of their own.
    pub fn detail_line(&self) -> String {
        match (self.subject_kind, self.category) {
            (ResourceKind::Pipeline, IssueCategory::UnresolvedReference) => format!(
                "Activity '{}': child pipeline '{}' not found.",
                self.site_name, self.target
            ),
            (ResourceKind::Pipeline, IssueCategory::MissingRequiredParameters) => format!(
                "Activity '{}': missing required parameters: {}",
                self.site_name,
                parameter_list(&self.parameters)
            ),
            (ResourceKind::Pipeline, IssueCategory::RedundantDefaultParameters) => format!(
                "Activity '{}': redundant parameters matching default values: {}",
                self.site_name,
                parameter_list(&self.parameters)
            ),
            (ResourceKind::Trigger, IssueCategory::UnresolvedReference) => {
                format!("Pipeline '{}' not found for trigger.", self.target)
            }
            (ResourceKind::Trigger, IssueCategory::MissingRequiredParameters) => format!(
                "Missing required parameters for pipeline '{}': {}",
                self.target,
                parameter_list(&self.parameters)
            ),
            (ResourceKind::Trigger, IssueCategory::RedundantDefaultParameters) => format!(
                "Redundant parameters matching default values for pipeline '{}': {}",
                self.target,
                parameter_list(&self.parameters)
            ),
        }
    }
}

/// `['a', 'b']` — bracketed, single-quoted, comma-separated.
fn parameter_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
    format!("[{}]", quoted.join(", "))
}
