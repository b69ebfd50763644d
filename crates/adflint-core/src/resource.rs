//! Resource model for an exported Data Factory tree.
//!
//! Every resource file shares the `{name, type?, properties}` envelope;
//! `properties` is interpreted per kind. Parameter specs and activity
//! `typeProperties` are kept as raw JSON objects: "has a default" is key
//! presence of `defaultValue`, and non-invocation activities carry
//! arbitrary shapes the checker never inspects. `serde_json` is built with
//! `preserve_order`, so mapping fields keep declaration order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// 1. RESOURCE KINDS - the two indexed categories
// ============================================================================

/// Discriminant type tag expected in pipeline resource files.
pub const PIPELINE_RESOURCE_TYPE: &str = "Microsoft.DataFactory/factories/pipelines";

/// Discriminant type tag expected in trigger resource files.
pub const TRIGGER_RESOURCE_TYPE: &str = "Microsoft.DataFactory/factories/triggers";

/// The one activity type whose parameter passing is checked.
pub const EXECUTE_PIPELINE_ACTIVITY: &str = "ExecutePipeline";

/// The two resource categories the validator indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Pipeline,
    Trigger,
}

impl ResourceKind {
    /// Subdirectory of the factory root scanned for this kind.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ResourceKind::Pipeline => "pipeline",
            ResourceKind::Trigger => "trigger",
        }
    }

    /// Expected `type` tag; a file carrying a different tag is skipped.
    pub fn expected_type(&self) -> &'static str {
        match self {
            ResourceKind::Pipeline => PIPELINE_RESOURCE_TYPE,
            ResourceKind::Trigger => TRIGGER_RESOURCE_TYPE,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    /// Capitalized form used in report subject headers.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Pipeline => write!(f, "Pipeline"),
            ResourceKind::Trigger => write!(f, "Trigger"),
        }
    }
}

// ============================================================================
// 2. FILE ENVELOPE - shared outer shape of every resource file
// ============================================================================

/// Outer object of a resource file: `{name, type?, properties}`.
///
/// Extracted from an already-decoded [`Value`] so JSON syntax errors and
/// structural problems stay distinguishable in diagnostics; the loader
/// interprets `properties` per kind in a second step.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceEnvelope {
    /// Resource name, the index key within its kind.
    pub name: String,

    /// Declared type tag. Absent means "assume the expected kind".
    #[serde(rename = "type")]
    pub resource_type: Option<String>,

    /// Kind-specific payload, still uninterpreted.
    pub properties: Value,
}

// ============================================================================
// 3. PIPELINE RESOURCES - parameters and activities
// ============================================================================

/// Properties of a pipeline resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineDefinition {
    /// Declared parameters in declaration order. Each value is the raw
    /// spec object; a parameter has a default exactly when its spec
    /// carries a `defaultValue` key (an explicit `null` default counts).
    #[serde(default)]
    pub parameters: Map<String, Value>,

    /// Activities in declaration order.
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A step inside a pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    pub name: String,

    /// Activity type. Only [`EXECUTE_PIPELINE_ACTIVITY`] is interpreted.
    #[serde(rename = "type")]
    pub kind: String,

    /// Type-specific payload; arbitrary for non-invocation activities.
    #[serde(rename = "typeProperties", default)]
    pub type_properties: Map<String, Value>,
}

impl Activity {
    /// Whether this activity invokes another pipeline.
    pub fn is_pipeline_invocation(&self) -> bool {
        self.kind == EXECUTE_PIPELINE_ACTIVITY
    }

    /// Referenced pipeline name (`typeProperties.pipeline.referenceName`).
    ///
    /// `None` for non-invocation activities and for invocation activities
    /// whose reference block is missing or malformed.
    pub fn target_pipeline(&self) -> Option<&str> {
        self.type_properties
            .get("pipeline")?
            .get("referenceName")?
            .as_str()
    }

    /// Parameters supplied to the invoked pipeline.
    ///
    /// `None` when `typeProperties.parameters` is absent or not an object;
    /// callers treat that as an empty mapping.
    pub fn supplied_parameters(&self) -> Option<&Map<String, Value>> {
        self.type_properties.get("parameters")?.as_object()
    }
}

// ============================================================================
// 4. TRIGGER RESOURCES - pipeline bindings
// ============================================================================

/// Properties of a trigger resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggerDefinition {
    /// Pipelines this trigger starts, in declaration order.
    #[serde(default)]
    pub pipelines: Vec<PipelineBinding>,
}

/// One trigger-to-pipeline binding.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineBinding {
    #[serde(rename = "pipelineReference")]
    pub pipeline_reference: PipelineReference,

    /// Parameters supplied to the bound pipeline; empty when absent.
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

/// Reference block naming the bound pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineReference {
    #[serde(rename = "referenceName")]
    pub reference_name: String,
}
