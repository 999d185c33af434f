//! tfplan - Terraform plan flattener
//!
//! Folds every resource in a Terraform JSON plan, at any module depth, into a
//! flat `resource -> type -> address -> values` model for static analysis.

pub mod document;
pub mod error;
pub mod loader;
pub mod output;
pub mod terraform;

pub use document::{Document, ResourceModel, widen_numbers};
pub use error::TfplanError;
pub use loader::{load_document, load_document_from_path};
pub use terraform::{
    ParsedPlan, PlanError, PlanInfo, SkipReason, SkippedEntry, classify, is_plan, parse_plan,
    parse_plan_with_diagnostics,
};
