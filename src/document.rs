//! Configuration documents: a JSON object mapping module names to module entries.
//!
//! Module entries are modeled as a tagged variant so that non-object entries are
//! carried through untouched and never cause a failure when fields are accessed.

use crate::error::DocumentError;
use indexmap::IndexMap;
use serde_json::{Map, Value};

mod io;

pub use io::{load_document, save_document};

/// The one field synchronized between documents.
pub const KEY_FIELD: &str = "key";

/// A single module's settings.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleEntry {
    /// A JSON object of field name to value.
    Mapping(Map<String, Value>),
    /// Any other JSON value. Treated as having no fields.
    Opaque(Value),
}

impl ModuleEntry {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => ModuleEntry::Mapping(fields),
            other => ModuleEntry::Opaque(other),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            ModuleEntry::Mapping(fields) => Value::Object(fields),
            ModuleEntry::Opaque(value) => value,
        }
    }

    pub fn to_value(&self) -> Value {
        self.clone().into_value()
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, ModuleEntry::Mapping(_))
    }

    /// Field lookup; always `None` for opaque entries.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            ModuleEntry::Mapping(fields) => fields.get(name),
            ModuleEntry::Opaque(_) => None,
        }
    }

    pub fn key_binding(&self) -> Option<&Value> {
        self.field(KEY_FIELD)
    }

    /// Remove the `key` field, keeping the order of the remaining fields.
    pub fn remove_key_binding(&mut self) -> Option<Value> {
        match self {
            ModuleEntry::Mapping(fields) => fields.shift_remove(KEY_FIELD),
            ModuleEntry::Opaque(_) => None,
        }
    }

    /// Set the `key` field. An opaque entry is first replaced by an empty mapping.
    pub fn set_key_binding(&mut self, value: Value) {
        if let ModuleEntry::Opaque(_) = self {
            *self = ModuleEntry::Mapping(Map::new());
        }
        if let ModuleEntry::Mapping(fields) = self {
            fields.insert(KEY_FIELD.to_string(), value);
        }
    }
}

impl From<Value> for ModuleEntry {
    fn from(value: Value) -> Self {
        ModuleEntry::from_value(value)
    }
}

/// A configuration document. Module order follows the input file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    modules: IndexMap<String, ModuleEntry>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from a parsed JSON value. The root must be an object.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(name, entry)| (name, ModuleEntry::from_value(entry)))
                .collect()),
            other => Err(DocumentError::NotAnObject(value_kind(&other))),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(text).map_err(DocumentError::Parse)?;
        Self::from_value(value)
    }

    pub fn into_value(self) -> Value {
        Value::Object(
            self.modules
                .into_iter()
                .map(|(name, entry)| (name, entry.into_value()))
                .collect(),
        )
    }

    pub fn to_value(&self) -> Value {
        self.clone().into_value()
    }

    /// Two-space indented JSON with non-ASCII characters written literally.
    pub fn to_pretty_string(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(&self.to_value()).map_err(DocumentError::Serialize)
    }

    pub fn module(&self, name: &str) -> Option<&ModuleEntry> {
        self.modules.get(name)
    }

    pub fn module_mut(&mut self, name: &str) -> Option<&mut ModuleEntry> {
        self.modules.get_mut(name)
    }

    pub fn contains_module(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    pub fn insert_module(&mut self, name: impl Into<String>, entry: ModuleEntry) {
        self.modules.insert(name.into(), entry);
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn modules(&self) -> impl Iterator<Item = (&str, &ModuleEntry)> {
        self.modules.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn modules_mut(&mut self) -> impl Iterator<Item = (&str, &mut ModuleEntry)> {
        self.modules
            .iter_mut()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl FromIterator<(String, ModuleEntry)> for ConfigDocument {
    fn from_iter<I: IntoIterator<Item = (String, ModuleEntry)>>(iter: I) -> Self {
        Self {
            modules: iter.into_iter().collect(),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
