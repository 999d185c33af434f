use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// No `planned_values.root_module` mapping in the document.
    #[error("not a terraform plan document: missing planned_values.root_module")]
    NotAPlanDocument,
}
