mod error;
mod module;
mod plan;

pub use error::PlanError;
pub use module::{Module, ResourceEntry, SkipReason, SkippedEntry};
pub use plan::{
    Accumulator, Classification, ParsedPlan, PlanInfo, classify, is_plan, parse_plan,
    parse_plan_with_diagnostics, root_module, walk,
};
