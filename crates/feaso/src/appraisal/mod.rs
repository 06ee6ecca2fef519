//! Site appraisal: yield suitability, ResCode compliance and development feasibility.
//!
//! The three calculators are pure functions over caller-supplied records. Inputs are not
//! validated; negative or out-of-range figures flow through the arithmetic unchanged.

pub mod council;
pub mod domain;
pub mod feasibility;
pub mod input;
pub mod report;
pub mod rescode;
pub mod router;
pub mod service;
pub mod yield_scoring;

#[cfg(test)]
mod tests;

pub use council::{CouncilCategory, CouncilProfile, CouncilRegistry, CouncilRegistryError};
pub use domain::{
    Bankability, CostBreakdown, CostInputs, DrawdownProfile, FeasibilityResult, FinanceInputs,
    PlanningInputs, ProductType, ResCodeCheckResult, SalesInputs, Scenario, ScoreBand, Site,
    SoftCostsBreakdown, SpecLevel, TaxInputs, YieldScore,
};
pub use feasibility::FeasibilityCalculator;
pub use input::{AppraisalRequest, RequestLoadError};
pub use report::{ComparisonRow, ReportExportError, ScenarioAppraisal, SiteAppraisal};
pub use rescode::ComplianceChecker;
pub use router::appraisal_router;
pub use service::AppraisalService;
pub use yield_scoring::YieldScorer;
