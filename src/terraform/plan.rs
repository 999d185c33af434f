//! Flattening of `planned_values` in a Terraform JSON plan.
//!
//! A plan nests resources inside a root module and an arbitrarily deep tree of
//! child modules. Every resource at every depth lands in one
//! [`ResourceModel`], keyed by type and then by address.

use serde_json::Value;

use super::PlanError;
use super::module::{Module, ResourceEntry, SkippedEntry};
use crate::document::{Document, ResourceModel, widen_numbers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub is_plan: bool,
}

/// Descriptive fields of a plan. Not needed to build the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanInfo {
    pub format_version: Option<String>,
    pub terraform_version: Option<String>,
}

impl PlanInfo {
    fn read(doc: &Document) -> Self {
        let string_field = |key: &str| doc.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            format_version: string_field("format_version"),
            terraform_version: string_field("terraform_version"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPlan {
    pub model: ResourceModel,
    pub info: PlanInfo,
    pub skipped: Vec<SkippedEntry>,
}

/// Returns `planned_values.root_module` when both levels are mappings.
pub fn root_module(doc: &Document) -> Option<&Document> {
    doc.get("planned_values")?
        .as_object()?
        .get("root_module")?
        .as_object()
}

pub fn classify(doc: &Document) -> Classification {
    Classification {
        is_plan: root_module(doc).is_some(),
    }
}

pub fn is_plan(doc: &Document) -> bool {
    classify(doc).is_plan
}

/// State threaded through one walk of the module tree.
#[derive(Debug, Default)]
pub struct Accumulator {
    pub model: ResourceModel,
    pub skipped: Vec<SkippedEntry>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    fn skip(&mut self, entry: SkippedEntry) {
        self.skipped.push(entry);
    }
}

/// Folds `module` and all of its descendants into `acc`.
///
/// Own resources come first, then each child module in document order.
/// Nesting depth is not bounded here.
pub fn walk(module: &Module<'_>, acc: &mut Accumulator) {
    for reason in &module.malformed {
        acc.skip(SkippedEntry {
            module: module.label.clone(),
            index: None,
            reason: *reason,
        });
    }

    for (index, entry) in module.resources.iter().enumerate() {
        match ResourceEntry::decode(entry) {
            Ok(resource) => {
                let values = resource.values.cloned().map_or(Value::Null, widen_numbers);
                acc.model
                    .insert(resource.resource_type, resource.address, values);
            }
            Err(reason) => acc.skip(SkippedEntry {
                module: module.label.clone(),
                index: Some(index),
                reason,
            }),
        }
    }

    for index in 0..module.child_modules.len() {
        match module.child(index) {
            Some(Ok(child)) => walk(&child, acc),
            Some(Err(skipped)) => acc.skip(skipped),
            None => {}
        }
    }
}

/// Flattens a plan into its resource model.
///
/// A plan with no resources yields an empty model, not an error.
pub fn parse_plan(doc: &Document) -> Result<ResourceModel, PlanError> {
    parse_plan_with_diagnostics(doc).map(|parsed| parsed.model)
}

/// Same as [`parse_plan`], also returning what was skipped and why.
pub fn parse_plan_with_diagnostics(doc: &Document) -> Result<ParsedPlan, PlanError> {
    let root = root_module(doc).ok_or(PlanError::NotAPlanDocument)?;

    let mut acc = Accumulator::new();
    walk(&Module::root(root), &mut acc);

    Ok(ParsedPlan {
        model: acc.model,
        info: PlanInfo::read(doc),
        skipped: acc.skipped,
    })
}
