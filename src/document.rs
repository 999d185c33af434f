use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Number, Value};

/// A decoded JSON mapping, used for both plan input and normalized output.
pub type Document = Map<String, Value>;

pub const RESOURCE_KEY: &str = "resource";

/// Flat `type -> address -> values` view of every resource in a plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceModel {
    resources: BTreeMap<String, BTreeMap<String, Value>>,
}

impl ResourceModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins for a repeated `(type, address)` pair.
    pub fn insert(
        &mut self,
        resource_type: impl Into<String>,
        address: impl Into<String>,
        values: Value,
    ) -> Option<Value> {
        self.resources
            .entry(resource_type.into())
            .or_default()
            .insert(address.into(), values)
    }

    pub fn get(&self, resource_type: &str, address: &str) -> Option<&Value> {
        self.resources.get(resource_type)?.get(address)
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn addresses(&self, resource_type: &str) -> Vec<&str> {
        self.resources
            .get(resource_type)
            .map(|by_address| by_address.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn count(&self, resource_type: &str) -> usize {
        self.resources.get(resource_type).map_or(0, BTreeMap::len)
    }

    /// Total number of resource entries across all types.
    pub fn len(&self) -> usize {
        self.resources.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Converts into the generic output shape. An empty model becomes `{}`,
    /// never `{"resource": {}}`.
    pub fn into_document(self) -> Document {
        let mut doc = Document::new();
        if self.resources.is_empty() {
            return doc;
        }

        let types: Document = self
            .resources
            .into_iter()
            .map(|(resource_type, by_address)| {
                let by_address: Document = by_address.into_iter().collect();
                (resource_type, Value::Object(by_address))
            })
            .collect();

        doc.insert(RESOURCE_KEY.to_string(), Value::Object(types));
        doc
    }
}

impl From<ResourceModel> for Document {
    fn from(model: ResourceModel) -> Self {
        model.into_document()
    }
}

impl Serialize for ResourceModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.resources.is_empty() {
            return serializer.serialize_map(Some(0))?.end();
        }
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(RESOURCE_KEY, &self.resources)?;
        map.end()
    }
}

/// Widens every number to its `f64` form, the way a generic JSON decoder
/// without an integer type would hand them over.
pub fn widen_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64().and_then(Number::from_f64) {
            Some(widened) => Value::Number(widened),
            None => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(widen_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, v)| (key, widen_numbers(v)))
                .collect(),
        ),
        other => other,
    }
}
