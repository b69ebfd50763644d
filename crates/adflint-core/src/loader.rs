//! Resource loading and indexing.
//!
//! Scans the factory layout's `pipeline/` and `trigger/` subdirectories,
//! parses each `*.json` file through its envelope, and builds name-keyed
//! indexes. Files that cannot be used are logged and skipped; loading
//! never fails the run, so one broken export cannot hide findings in the
//! rest of the factory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::{ResourceError, Result};
use crate::resource::{PipelineDefinition, ResourceEnvelope, ResourceKind, TriggerDefinition};

/// Parse one resource file into its name and typed definition.
///
/// Stages, in order: read, JSON parse, `type` tag check on the raw value,
/// envelope extraction, definition extraction. The tag is checked before
/// the envelope so a foreign file is classified by its tag even when it
/// lacks `name` or `properties`. A file without any `type` key is
/// accepted as the expected kind.
pub fn parse_resource_file<T>(path: &Path, kind: ResourceKind) -> Result<(String, T)>
where
    T: DeserializeOwned,
{
    let text = fs::read_to_string(path)?;
    let raw: Value = serde_json::from_str(&text)?;

    if let Some(tag) = raw.get("type") {
        if tag.as_str() != Some(kind.expected_type()) {
            let found = match tag.as_str() {
                Some(s) => s.to_owned(),
                None => tag.to_string(),
            };
            return Err(ResourceError::UnexpectedType { found });
        }
    }

    let envelope: ResourceEnvelope =
        serde_json::from_value(raw).map_err(|e| ResourceError::Malformed(e.to_string()))?;
    let definition: T = serde_json::from_value(envelope.properties)
        .map_err(|e| ResourceError::Malformed(e.to_string()))?;

    Ok((envelope.name, definition))
}

/// `*.json` files directly under `dir`, sorted by file name.
///
/// The sort pins duplicate-name resolution to a platform-independent
/// order. Subdirectories are not descended into.
fn json_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Cannot read directory '{}': {}", dir.display(), err);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().map(|ext| ext == "json").unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}

fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// Load every resource of one kind from `dir` into a name-keyed index.
///
/// A missing directory is a warning and an empty index. Every per-file
/// failure is logged at a severity matching its class and the file is
/// skipped. When two files declare the same name, the later file in
/// sorted order wins and the collision is logged.
pub fn load_resources<T>(dir: &Path, kind: ResourceKind) -> BTreeMap<String, T>
where
    T: DeserializeOwned,
{
    let mut resources = BTreeMap::new();

    if !dir.is_dir() {
        warn!("{} directory '{}' does not exist.", kind, dir.display());
        return resources;
    }

    for path in json_files(dir) {
        let file_name = display_name(&path);
        match parse_resource_file::<T>(&path, kind) {
            Ok((name, definition)) => {
                debug!("Loaded {} '{}' from {}", kind.dir_name(), name, file_name);
                if resources.insert(name.clone(), definition).is_some() {
                    warn!(
                        "Duplicate {} name '{}': keeping the definition from '{}'",
                        kind.dir_name(),
                        name,
                        file_name
                    );
                }
            }
            Err(ResourceError::UnexpectedType { .. }) => {
                warn!(
                    "Unexpected non-{} file in '{}': {}",
                    kind.dir_name(),
                    kind.dir_name(),
                    file_name
                );
            }
            Err(ResourceError::Parse(err)) => {
                error!("Error parsing {} in '{}': {}", file_name, kind.dir_name(), err);
            }
            Err(ResourceError::Malformed(detail)) => {
                error!("Malformed {} file {}: {}", kind.dir_name(), file_name, detail);
            }
            Err(ResourceError::Io(err)) => {
                error!("Error reading {} in '{}': {}", file_name, kind.dir_name(), err);
            }
        }
    }

    resources
}

/// Load both indexes from a factory root directory.
pub fn load_factory(
    root: &Path,
) -> (
    BTreeMap<String, PipelineDefinition>,
    BTreeMap<String, TriggerDefinition>,
) {
    let pipelines = load_resources(
        &root.join(ResourceKind::Pipeline.dir_name()),
        ResourceKind::Pipeline,
    );
    let triggers = load_resources(
        &root.join(ResourceKind::Trigger.dir_name()),
        ResourceKind::Trigger,
    );
    (pipelines, triggers)
}
