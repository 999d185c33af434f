use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::document::Document;

pub const ROOT_MODULE_LABEL: &str = "root";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A `resources` entry that is not a mapping.
    NotAnObject,
    MissingType,
    MissingAddress,
    /// `resources` present but not a sequence.
    MalformedResources,
    /// `child_modules` present but not a sequence.
    MalformedChildModules,
    /// A `child_modules` entry that is not a mapping.
    MalformedChildModule,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::NotAnObject => "resource entry is not an object",
            SkipReason::MissingType => "resource entry has no string `type`",
            SkipReason::MissingAddress => "resource entry has no string `address`",
            SkipReason::MalformedResources => "`resources` is not an array",
            SkipReason::MalformedChildModules => "`child_modules` is not an array",
            SkipReason::MalformedChildModule => "child module is not an object",
        };
        f.write_str(reason)
    }
}

/// Something the walker left out of the model, and where it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub module: String,
    pub index: Option<usize>,
    pub reason: SkipReason,
}

/// Field-by-field decoded view of a module node.
///
/// Absent `resources` or `child_modules` decode to empty slices. A field that is
/// present with the wrong type also decodes to an empty slice, and the problem
/// is kept in `malformed` so the walker can report it.
#[derive(Debug, Clone)]
pub struct Module<'a> {
    pub label: String,
    pub address: Option<&'a str>,
    pub resources: &'a [Value],
    pub child_modules: &'a [Value],
    pub malformed: Vec<SkipReason>,
}

impl<'a> Module<'a> {
    pub fn decode(node: &'a Document, fallback_label: impl Into<String>) -> Self {
        let address = node.get("address").and_then(Value::as_str);
        let mut malformed = Vec::new();

        let resources = sequence_field(node, "resources").unwrap_or_else(|| {
            malformed.push(SkipReason::MalformedResources);
            &[]
        });
        let child_modules = sequence_field(node, "child_modules").unwrap_or_else(|| {
            malformed.push(SkipReason::MalformedChildModules);
            &[]
        });

        Self {
            label: address.map_or_else(|| fallback_label.into(), str::to_string),
            address,
            resources,
            child_modules,
            malformed,
        }
    }

    pub fn root(node: &'a Document) -> Self {
        Self::decode(node, ROOT_MODULE_LABEL)
    }

    /// Decodes the child at `index`, or reports why it cannot be walked.
    pub fn child(&self, index: usize) -> Option<Result<Module<'a>, SkippedEntry>> {
        let node = self.child_modules.get(index)?;
        let decoded = match node.as_object() {
            Some(obj) => Ok(Module::decode(
                obj,
                format!("{}.child_modules[{index}]", self.label),
            )),
            None => Err(SkippedEntry {
                module: self.label.clone(),
                index: Some(index),
                reason: SkipReason::MalformedChildModule,
            }),
        };
        Some(decoded)
    }
}

/// `Some(&[])` when absent, `None` when present but not an array.
fn sequence_field<'a>(node: &'a Document, key: &str) -> Option<&'a [Value]> {
    match node.get(key) {
        None | Some(Value::Null) => Some(&[]),
        Some(Value::Array(items)) => Some(items.as_slice()),
        Some(_) => None,
    }
}

/// The parts of a resource entry the model is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceEntry<'a> {
    pub resource_type: &'a str,
    pub address: &'a str,
    pub values: Option<&'a Value>,
}

impl<'a> ResourceEntry<'a> {
    pub fn decode(entry: &'a Value) -> Result<Self, SkipReason> {
        let obj = entry.as_object().ok_or(SkipReason::NotAnObject)?;
        let resource_type = obj
            .get("type")
            .and_then(Value::as_str)
            .ok_or(SkipReason::MissingType)?;
        let address = obj
            .get("address")
            .and_then(Value::as_str)
            .ok_or(SkipReason::MissingAddress)?;

        Ok(Self {
            resource_type,
            address,
            values: obj.get("values"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_decode_absent_fields_are_empty() {
        let node = object(json!({}));
        let module = Module::root(&node);

        assert_eq!(module.label, "root");
        assert!(module.address.is_none());
        assert!(module.resources.is_empty());
        assert!(module.child_modules.is_empty());
        assert!(module.malformed.is_empty());
    }

    #[test]
    fn test_decode_null_fields_are_empty() {
        let node = object(json!({"resources": null, "child_modules": null}));
        let module = Module::root(&node);
        assert!(module.malformed.is_empty());
    }

    #[test]
    fn test_decode_wrong_typed_fields_are_reported() {
        let node = object(json!({"resources": {"a": 1}, "child_modules": "nope"}));
        let module = Module::root(&node);

        assert!(module.resources.is_empty());
        assert!(module.child_modules.is_empty());
        assert_eq!(
            module.malformed,
            vec![SkipReason::MalformedResources, SkipReason::MalformedChildModules]
        );
    }

    #[test]
    fn test_child_uses_address_as_label() {
        let node = object(json!({
            "child_modules": [
                {"address": "module.network"},
                {},
                "garbage"
            ]
        }));
        let module = Module::root(&node);

        let named = module.child(0).unwrap().unwrap();
        assert_eq!(named.label, "module.network");
        assert_eq!(named.address, Some("module.network"));

        let unnamed = module.child(1).unwrap().unwrap();
        assert_eq!(unnamed.label, "root.child_modules[1]");

        let err = module.child(2).unwrap().unwrap_err();
        assert_eq!(err.reason, SkipReason::MalformedChildModule);
        assert_eq!(err.index, Some(2));

        assert!(module.child(3).is_none());
    }

    #[test]
    fn test_resource_entry_decode() {
        let entry = json!({
            "address": "aws_vpc.main",
            "type": "aws_vpc",
            "values": {"cidr_block": "10.0.0.0/16"}
        });
        let decoded = ResourceEntry::decode(&entry).unwrap();

        assert_eq!(decoded.resource_type, "aws_vpc");
        assert_eq!(decoded.address, "aws_vpc.main");
        assert_eq!(decoded.values, Some(&json!({"cidr_block": "10.0.0.0/16"})));
    }

    #[test]
    fn test_resource_entry_decode_rejects_malformed() {
        assert_eq!(
            ResourceEntry::decode(&json!([1, 2])),
            Err(SkipReason::NotAnObject)
        );
        assert_eq!(
            ResourceEntry::decode(&json!({"address": "x.y"})),
            Err(SkipReason::MissingType)
        );
        assert_eq!(
            ResourceEntry::decode(&json!({"type": "x", "address": 7})),
            Err(SkipReason::MissingAddress)
        );
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(
            SkipReason::MissingAddress.to_string(),
            "resource entry has no string `address`"
        );
    }
}
