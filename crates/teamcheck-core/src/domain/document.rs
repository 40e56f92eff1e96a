//! Read-only view over a parsed team configuration.
//!
//! The document is kept as an untyped JSON mapping so that partially
//! malformed input can still be inspected field by field. Typed accessors
//! return `None` when a section is absent or has the wrong shape; rules decide
//! whether that is worth reporting.

use serde_json::{Map, Value};

use super::error::{LoadError, Result};

/// A loaded team configuration. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamDocument {
    root: Map<String, Value>,
}

impl TeamDocument {
    /// Wrap a parsed value. The root must be a mapping.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(LoadError::NotAMapping {
                found: value_kind(&other),
            }),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Whether a top-level key is present, regardless of its value.
    pub fn contains(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// The `roles` sequence, if present and actually a sequence.
    pub fn roles(&self) -> Option<&[Value]> {
        self.get("roles")?.as_array().map(Vec::as_slice)
    }

    /// Mapping-shaped role entries with their document index.
    pub fn role_entries(&self) -> Vec<RoleEntry<'_>> {
        self.roles()
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter_map(|(index, v)| v.as_object().map(|fields| RoleEntry { index, fields }))
            .collect()
    }

    pub fn workflow(&self) -> Option<&Map<String, Value>> {
        self.get("workflow")?.as_object()
    }

    /// `workflow.phases`, if present and actually a sequence.
    pub fn phases(&self) -> Option<&[Value]> {
        self.workflow()?
            .get("phases")?
            .as_array()
            .map(Vec::as_slice)
    }

    pub fn phase_entries(&self) -> Vec<PhaseEntry<'_>> {
        self.phases()
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter_map(|(index, v)| v.as_object().map(|fields| PhaseEntry { index, fields }))
            .collect()
    }

    /// `communication.channels`, if present and actually a sequence.
    pub fn channels(&self) -> Option<&[Value]> {
        self.get("communication")?
            .as_object()?
            .get("channels")?
            .as_array()
            .map(Vec::as_slice)
    }

    pub fn channel_entries(&self) -> Vec<ChannelEntry<'_>> {
        self.channels()
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter_map(|(index, v)| v.as_object().map(|fields| ChannelEntry { index, fields }))
            .collect()
    }
}

impl TryFrom<Value> for TeamDocument {
    type Error = LoadError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

/// A role definition at `roles[index]`.
#[derive(Debug, Clone, Copy)]
pub struct RoleEntry<'a> {
    pub index: usize,
    pub fields: &'a Map<String, Value>,
}

impl<'a> RoleEntry<'a> {
    pub fn path(&self) -> String {
        format!("roles[{}]", self.index)
    }

    /// The identity key, rendered as text. `None` when the key is missing.
    pub fn id(&self) -> Option<String> {
        self.fields.get("id").map(value_label)
    }

    /// Display name used in messages: the id, or the document path.
    pub fn label(&self) -> String {
        self.id().unwrap_or_else(|| self.path())
    }

    pub fn model(&self) -> Option<&'a Value> {
        self.fields.get("model")
    }

    /// Free-text role classification; empty when absent or not a string.
    pub fn role_type(&self) -> &'a str {
        self.fields
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn has_responsibilities(&self) -> bool {
        self.fields.get("responsibilities").is_some_and(is_non_empty)
    }

    /// Supervisor reference. An explicit null is treated as no supervisor.
    pub fn reports_to(&self) -> Option<String> {
        match self.fields.get("reports_to") {
            None | Some(Value::Null) => None,
            Some(v) => Some(value_label(v)),
        }
    }
}

/// A workflow phase at `workflow.phases[index]`.
#[derive(Debug, Clone, Copy)]
pub struct PhaseEntry<'a> {
    pub index: usize,
    pub fields: &'a Map<String, Value>,
}

impl<'a> PhaseEntry<'a> {
    pub fn path(&self) -> String {
        format!("workflow.phases[{}]", self.index)
    }

    pub fn name(&self) -> Option<String> {
        self.fields.get("name").map(value_label)
    }

    pub fn label(&self) -> String {
        self.name().unwrap_or_else(|| self.path())
    }

    /// Declared dependency names. A single scalar is read as one dependency.
    pub fn dependencies(&self) -> Vec<String> {
        match self.fields.get("dependencies") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.iter().map(value_label).collect(),
            Some(other) => vec![value_label(other)],
        }
    }

    pub fn duration(&self) -> Option<&'a str> {
        self.fields.get("duration").and_then(Value::as_str)
    }

    /// Whether any key or value of this phase mentions parallel execution.
    pub fn mentions_parallel(&self) -> bool {
        serde_json::to_string(self.fields)
            .map(|text| text.to_lowercase().contains("parallel"))
            .unwrap_or(false)
    }
}

/// A communication channel at `communication.channels[index]`.
#[derive(Debug, Clone, Copy)]
pub struct ChannelEntry<'a> {
    pub index: usize,
    pub fields: &'a Map<String, Value>,
}

impl<'a> ChannelEntry<'a> {
    pub fn path(&self) -> String {
        format!("communication.channels[{}]", self.index)
    }

    pub fn kind(&self) -> Option<&'a str> {
        self.fields.get("type").and_then(Value::as_str)
    }

    pub fn label(&self) -> String {
        self.fields
            .get("name")
            .map(value_label)
            .unwrap_or_else(|| self.index.to_string())
    }

    pub fn has_frequency(&self) -> bool {
        self.fields.contains_key("frequency")
    }
}

/// Render a scalar as message text: strings verbatim, anything else as JSON.
pub fn value_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Short name of a JSON value's shape, for diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

fn is_non_empty(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty(),
        Value::String(s) => !s.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> TeamDocument {
        TeamDocument::from_value(value).expect("mapping root")
    }

    #[test]
    fn rejects_non_mapping_root() {
        let err = TeamDocument::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, LoadError::NotAMapping { found: "sequence" }));
    }

    #[test]
    fn role_entries_skip_non_mappings_but_keep_indices() {
        let d = doc(json!({ "roles": ["oops", { "id": "dev" }] }));
        let entries = d.role_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].index, 1);
        assert_eq!(entries[0].path(), "roles[1]");
        assert_eq!(entries[0].id().as_deref(), Some("dev"));
    }

    #[test]
    fn non_string_ids_render_as_json() {
        let d = doc(json!({ "roles": [{ "id": 7 }] }));
        assert_eq!(d.role_entries()[0].id().as_deref(), Some("7"));
    }

    #[test]
    fn null_reports_to_is_absent() {
        let d = doc(json!({ "roles": [{ "id": "a", "reports_to": null }] }));
        assert_eq!(d.role_entries()[0].reports_to(), None);
    }

    #[test]
    fn empty_responsibilities_are_not_defined() {
        let d = doc(json!({ "roles": [
            { "id": "a", "responsibilities": [] },
            { "id": "b", "responsibilities": ["ship"] },
            { "id": "c" }
        ] }));
        let entries = d.role_entries();
        assert!(!entries[0].has_responsibilities());
        assert!(entries[1].has_responsibilities());
        assert!(!entries[2].has_responsibilities());
    }

    #[test]
    fn phases_require_workflow_mapping() {
        let d = doc(json!({ "workflow": ["design"] }));
        assert!(d.phases().is_none());
        assert!(d.phase_entries().is_empty());
    }

    #[test]
    fn scalar_dependency_is_one_entry() {
        let d = doc(json!({ "workflow": { "phases": [{ "name": "b", "dependencies": "a" }] } }));
        assert_eq!(d.phase_entries()[0].dependencies(), vec!["a".to_string()]);
    }

    #[test]
    fn parallel_marker_found_in_keys_and_values() {
        let d = doc(json!({ "workflow": { "phases": [
            { "name": "build", "parallel": true },
            { "name": "test", "description": "Run suites in Parallel" },
            { "name": "ship" }
        ] } }));
        let phases = d.phase_entries();
        assert!(phases[0].mentions_parallel());
        assert!(phases[1].mentions_parallel());
        assert!(!phases[2].mentions_parallel());
    }

    #[test]
    fn channel_label_falls_back_to_index() {
        let d = doc(json!({ "communication": { "channels": [{ "type": "async" }] } }));
        let ch = d.channel_entries();
        assert_eq!(ch[0].label(), "0");
        assert_eq!(ch[0].kind(), Some("async"));
        assert!(!ch[0].has_frequency());
    }
}
