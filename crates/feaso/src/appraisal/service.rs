use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::council::{CouncilProfile, CouncilRegistry, CouncilRegistryError};
use super::domain::{
    FeasibilityResult, PlanningInputs, ResCodeCheckResult, Scenario, Site, YieldScore,
};
use super::feasibility::FeasibilityCalculator;
use super::input::AppraisalRequest;
use super::report::SiteAppraisal;
use super::rescode::ComplianceChecker;
use super::yield_scoring::YieldScorer;
use crate::config::AppraisalConfig;

/// Facade over the calculators and council reference data.
///
/// Holds no mutable state, so a single instance can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct AppraisalService {
    councils: Arc<CouncilRegistry>,
}

impl AppraisalService {
    pub fn new(councils: CouncilRegistry) -> Self {
        Self {
            councils: Arc::new(councils),
        }
    }

    pub fn from_config(config: &AppraisalConfig) -> Result<Self, CouncilRegistryError> {
        let councils = match &config.council_profiles {
            Some(path) => {
                let registry = CouncilRegistry::from_path(path)?;
                info!(
                    path = %path.display(),
                    councils = registry.profiles().len(),
                    "loaded council profiles"
                );
                registry
            }
            None => CouncilRegistry::standard(),
        };
        Ok(Self::new(councils))
    }

    pub fn score_site(&self, site: &Site) -> [YieldScore; 3] {
        let scores = YieldScorer::score_all(site);
        debug!(
            site_id = %site.id,
            duplex = scores[0].score,
            triplex = scores[1].score,
            quadplex = scores[2].score,
            "scored site yield"
        );
        scores
    }

    pub fn check_rescode(&self, site: &Site, planning: &PlanningInputs) -> ResCodeCheckResult {
        let result = ComplianceChecker::check(site, planning);
        debug!(
            site_id = %site.id,
            compliant = result.compliant,
            issues = result.issues.len(),
            "checked ResCode compliance"
        );
        result
    }

    pub fn assess_feasibility(&self, site: &Site, scenario: &Scenario) -> FeasibilityResult {
        let result = FeasibilityCalculator::calculate(site, scenario);
        debug!(
            site_id = %site.id,
            scenario_id = %scenario.id,
            profit = result.profit,
            margin = ?result.margin_on_cost_percent,
            bankability = result.bankability_flag.label(),
            "assessed feasibility"
        );
        result
    }

    pub fn council_profile(&self, council: &str) -> Option<CouncilProfile> {
        self.councils.find(council).cloned()
    }

    pub fn appraise(&self, request: &AppraisalRequest, prepared_on: NaiveDate) -> SiteAppraisal {
        let council = self.councils.find(&request.site.council);
        let appraisal =
            SiteAppraisal::build(&request.site, &request.scenarios, council, prepared_on);
        info!(
            site_id = %request.site.id,
            scenarios = appraisal.scenarios.len(),
            recommended = appraisal.recommended_product.label(),
            "built site appraisal"
        );
        appraisal
    }
}
