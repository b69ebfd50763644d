//! Reference resolution and parameter checking.
//!
//! The algorithmic core: resolves every pipeline invocation (activity
//! `ExecutePipeline` calls and trigger bindings) against the pipeline
//! index and computes missing/redundant parameter findings under one
//! shared comparison rule.
//!
//! Absent `parameters`, `activities`, or binding lists are empty
//! containers here, never malformed input; structural problems are the
//! loader's business.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::warn;

use crate::issue::Issue;
use crate::resource::{PipelineDefinition, ResourceKind, TriggerDefinition};

// ---------------------------------------------------------------------------
// Comparison policy
// ---------------------------------------------------------------------------

/// Canonical textual form of a JSON value for redundancy comparison.
///
/// Strings yield their unquoted contents; every other value yields its
/// compact JSON encoding. The policy deliberately conflates type-equal and
/// type-coerced matches: number `5` matches string `"5"`, `true` matches
/// `"true"`, `null` matches `"null"`.
pub fn canonical_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Split a target's declared parameters against a call site's supplied
/// parameters.
///
/// Returns `(missing, redundant)`, both in declaration order:
/// - `missing`: no `defaultValue` key in the declaration and not supplied;
/// - `redundant`: a `defaultValue` key, a supplied value, and equal
///   [`canonical_string`] forms.
///
/// Supplied names that are not declared are ignored.
pub fn split_parameters(
    declared: &Map<String, Value>,
    supplied: &Map<String, Value>,
) -> (Vec<String>, Vec<String>) {
    let mut missing = Vec::new();
    let mut redundant = Vec::new();

    for (name, spec) in declared {
        match spec.get("defaultValue") {
            None => {
                if !supplied.contains_key(name) {
                    missing.push(name.clone());
                }
            }
            Some(default) => {
                if let Some(value) = supplied.get(name) {
                    if canonical_string(value) == canonical_string(default) {
                        redundant.push(name.clone());
                    }
                }
            }
        }
    }

    (missing, redundant)
}

// ---------------------------------------------------------------------------
// Procedure A - activity invocations inside pipelines
// ---------------------------------------------------------------------------

/// Check every `ExecutePipeline` activity of one pipeline.
///
/// Unresolved targets produce a single [`IssueCategory::UnresolvedReference`]
/// finding and no parameter checks for that activity. Resolved targets
/// produce at most one missing and one redundant finding, each carrying
/// the full parameter list. Activity declaration order is preserved.
///
/// [`IssueCategory::UnresolvedReference`]: crate::issue::IssueCategory::UnresolvedReference
pub fn check_activity_parameters(
    pipeline_name: &str,
    pipeline: &PipelineDefinition,
    pipelines: &BTreeMap<String, PipelineDefinition>,
) -> Vec<Issue> {
    let mut issues = Vec::new();
    let empty = Map::new();

    for activity in pipeline
        .activities
        .iter()
        .filter(|a| a.is_pipeline_invocation())
    {
        let target = match activity.target_pipeline() {
            Some(target) => target,
            None => {
                // Shape promised by the format but absent; the report must
                // still be produced, so skip rather than abort.
                warn!(
                    pipeline = %pipeline_name,
                    activity = %activity.name,
                    "ExecutePipeline activity has no pipeline reference, skipping"
                );
                continue;
            }
        };

        let child = match pipelines.get(target) {
            Some(child) => child,
            None => {
                issues.push(Issue::unresolved(
                    ResourceKind::Pipeline,
                    pipeline_name,
                    &activity.name,
                    target,
                ));
                continue;
            }
        };

        let supplied = activity.supplied_parameters().unwrap_or(&empty);
        let (missing, redundant) = split_parameters(&child.parameters, supplied);

        if !missing.is_empty() {
            issues.push(Issue::missing(
                ResourceKind::Pipeline,
                pipeline_name,
                &activity.name,
                target,
                missing,
            ));
        }
        if !redundant.is_empty() {
            issues.push(Issue::redundant(
                ResourceKind::Pipeline,
                pipeline_name,
                &activity.name,
                target,
                redundant,
            ));
        }
    }

    issues
}

// ---------------------------------------------------------------------------
// Procedure B - trigger bindings
// ---------------------------------------------------------------------------

/// Check every pipeline binding of every trigger.
///
/// Same unresolved/missing/redundant logic as the activity check, keyed by
/// trigger name. Bindings have no name of their own, so diagnostics for
/// different bindings of one trigger are distinguished only by the target
/// pipeline named in the rendered message.
pub fn check_trigger_parameters(
    triggers: &BTreeMap<String, TriggerDefinition>,
    pipelines: &BTreeMap<String, PipelineDefinition>,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (trigger_name, trigger) in triggers {
        for binding in &trigger.pipelines {
            let target = binding.pipeline_reference.reference_name.as_str();

            let pipeline = match pipelines.get(target) {
                Some(pipeline) => pipeline,
                None => {
                    issues.push(Issue::unresolved(
                        ResourceKind::Trigger,
                        trigger_name,
                        trigger_name,
                        target,
                    ));
                    continue;
                }
            };

            let (missing, redundant) =
                split_parameters(&pipeline.parameters, &binding.parameters);

            if !missing.is_empty() {
                issues.push(Issue::missing(
                    ResourceKind::Trigger,
                    trigger_name,
                    trigger_name,
                    target,
                    missing,
                ));
            }
            if !redundant.is_empty() {
                issues.push(Issue::redundant(
                    ResourceKind::Trigger,
                    trigger_name,
                    trigger_name,
                    target,
                    redundant,
                ));
            }
        }
    }

    issues
}

// ---------------------------------------------------------------------------
// Full-index check
// ---------------------------------------------------------------------------

/// Run both procedures over the full index: every pipeline's activities,
/// then every trigger's bindings.
///
/// Subject order is the maps' key order (name-sorted, so reports are
/// stable across platforms); within one subject, declaration order is
/// preserved.
pub fn check_factory(
    pipelines: &BTreeMap<String, PipelineDefinition>,
    triggers: &BTreeMap<String, TriggerDefinition>,
) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (name, pipeline) in pipelines {
        issues.extend(check_activity_parameters(name, pipeline, pipelines));
    }
    issues.extend(check_trigger_parameters(triggers, pipelines));
    issues
}
