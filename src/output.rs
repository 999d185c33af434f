use tabled::settings::Style;
use tabled::{Table, Tabled};
use termtree::Tree;

use crate::document::{Document, ResourceModel};
use crate::terraform::{Module, PlanError, ResourceEntry, root_module};

#[derive(Tabled)]
struct TypeRow {
    #[tabled(rename = "TYPE")]
    resource_type: String,
    #[tabled(rename = "COUNT")]
    count: usize,
}

pub fn render_json(model: &ResourceModel, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(model)
    } else {
        serde_json::to_string(model)
    }
}

pub fn render_summary(model: &ResourceModel) -> String {
    let rows: Vec<TypeRow> = model
        .types()
        .map(|resource_type| TypeRow {
            resource_type: resource_type.to_string(),
            count: model.count(resource_type),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Module tree of a plan with resource addresses as leaves.
pub fn render_tree(doc: &Document) -> Result<String, PlanError> {
    let root = root_module(doc).ok_or(PlanError::NotAPlanDocument)?;
    Ok(module_tree(&Module::root(root)).to_string())
}

fn module_tree(module: &Module<'_>) -> Tree<String> {
    let mut tree = Tree::new(module.label.clone());

    for entry in module.resources {
        if let Ok(resource) = ResourceEntry::decode(entry) {
            tree.push(Tree::new(resource.address.to_string()));
        }
    }

    for index in 0..module.child_modules.len() {
        if let Some(Ok(child)) = module.child(index) {
            tree.push(module_tree(&child));
        }
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_render_json_compact_empty() {
        assert_eq!(render_json(&ResourceModel::new(), false).unwrap(), "{}");
    }

    #[test]
    fn test_render_json_widened_number() {
        let mut model = ResourceModel::new();
        model.insert("t", "t.x", json!({"size": 256.0}));
        assert_eq!(
            render_json(&model, false).unwrap(),
            r#"{"resource":{"t":{"t.x":{"size":256.0}}}}"#
        );
    }

    #[test]
    fn test_render_summary_lists_types() {
        let mut model = ResourceModel::new();
        model.insert("aws_instance", "aws_instance.a", json!({}));
        model.insert("aws_instance", "aws_instance.b", json!({}));
        model.insert("aws_vpc", "aws_vpc.main", json!({}));

        let table = render_summary(&model);
        assert!(table.contains("TYPE"));
        assert!(table.contains("COUNT"));
        assert!(table.contains("aws_instance"));
        assert!(table.contains("aws_vpc"));
        assert!(table.contains('2'));
    }

    #[test]
    fn test_render_tree_nests_modules() {
        let plan = doc(json!({
            "planned_values": {
                "root_module": {
                    "resources": [{"type": "t", "address": "t.root"}],
                    "child_modules": [{
                        "address": "module.a",
                        "resources": [{"type": "t", "address": "module.a.t.x"}]
                    }]
                }
            }
        }));

        let tree = render_tree(&plan).unwrap();
        let lines: Vec<&str> = tree.lines().collect();
        assert_eq!(lines[0], "root");
        assert!(lines[1].ends_with("t.root"));
        assert!(lines[2].ends_with("module.a"));
        assert!(lines[3].ends_with("module.a.t.x"));
        assert!(lines[3].len() > lines[1].len());
    }

    #[test]
    fn test_render_tree_rejects_non_plan() {
        assert_eq!(
            render_tree(&doc(json!({"resource": {}}))),
            Err(PlanError::NotAPlanDocument)
        );
    }
}
