use super::council::CouncilProfile;
use super::domain::{
    Bankability, FeasibilityResult, ProductType, ResCodeCheckResult, Scenario, Site, YieldScore,
};
use super::feasibility::FeasibilityCalculator;
use super::rescode::ComplianceChecker;
use super::yield_scoring::YieldScorer;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum ReportExportError {
    #[error("failed to write comparison CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush comparison CSV: {0}")]
    Io(#[from] std::io::Error),
}

/// Feasibility pack for one site and the scenarios proposed on it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteAppraisal {
    pub prepared_on: NaiveDate,
    pub site: Site,
    pub yield_scores: [YieldScore; 3],
    pub recommended_product: ProductType,
    pub council: Option<CouncilProfile>,
    pub scenarios: Vec<ScenarioAppraisal>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAppraisal {
    pub scenario_id: String,
    pub scenario_name: String,
    pub product_type: ProductType,
    pub dwellings: u32,
    pub rescode: ResCodeCheckResult,
    pub feasibility: FeasibilityResult,
}

const COMPARISON_HEADERS: [&str; 9] = [
    "Scenario",
    "Product",
    "Dwellings",
    "Gross Realisation",
    "Total Development Cost",
    "Profit",
    "Margin On Cost %",
    "Bankability",
    "ResCode Compliant",
];

/// One line of the scenario comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    #[serde(rename = "Scenario")]
    pub scenario: String,
    #[serde(rename = "Product")]
    pub product: &'static str,
    #[serde(rename = "Dwellings")]
    pub dwellings: u32,
    #[serde(rename = "Gross Realisation")]
    pub gross_realisation: f64,
    #[serde(rename = "Total Development Cost")]
    pub total_development_cost: f64,
    #[serde(rename = "Profit")]
    pub profit: f64,
    #[serde(rename = "Margin On Cost %")]
    pub margin_on_cost_percent: Option<f64>,
    #[serde(rename = "Bankability")]
    pub bankability: &'static str,
    #[serde(rename = "ResCode Compliant")]
    pub rescode_compliant: bool,
}

impl SiteAppraisal {
    pub fn build(
        site: &Site,
        scenarios: &[Scenario],
        council: Option<&CouncilProfile>,
        prepared_on: NaiveDate,
    ) -> Self {
        let yield_scores = YieldScorer::score_all(site);
        let recommended_product = recommended_product(&yield_scores);

        let scenarios = scenarios
            .iter()
            .map(|scenario| ScenarioAppraisal {
                scenario_id: scenario.id.clone(),
                scenario_name: scenario.name.clone(),
                product_type: scenario.product_type,
                dwellings: scenario.dwellings,
                rescode: ComplianceChecker::check(site, &scenario.planning_inputs),
                feasibility: FeasibilityCalculator::calculate(site, scenario),
            })
            .collect();

        Self {
            prepared_on,
            site: site.clone(),
            yield_scores,
            recommended_product,
            council: council.cloned(),
            scenarios,
        }
    }

    pub fn comparison_rows(&self) -> Vec<ComparisonRow> {
        self.scenarios
            .iter()
            .map(|entry| ComparisonRow {
                scenario: if entry.scenario_name.is_empty() {
                    entry.scenario_id.clone()
                } else {
                    entry.scenario_name.clone()
                },
                product: entry.product_type.label(),
                dwellings: entry.dwellings,
                gross_realisation: entry.feasibility.gross_realisation,
                total_development_cost: entry.feasibility.total_development_cost,
                profit: entry.feasibility.profit,
                margin_on_cost_percent: entry.feasibility.margin_on_cost_percent,
                bankability: entry.feasibility.bankability_flag.label(),
                rescode_compliant: entry.rescode.compliant,
            })
            .collect()
    }

    /// Writes the header row even when there are no scenarios.
    pub fn write_comparison_csv<W: Write>(&self, writer: W) -> Result<(), ReportExportError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(COMPARISON_HEADERS)?;
        for row in self.comparison_rows() {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Scenarios a lender would look at without a fight.
    pub fn bankable_scenarios(&self) -> impl Iterator<Item = &ScenarioAppraisal> {
        self.scenarios
            .iter()
            .filter(|entry| entry.feasibility.bankability_flag == Bankability::Green)
    }
}

/// Highest score wins; ties go to the smaller product.
fn recommended_product(scores: &[YieldScore; 3]) -> ProductType {
    let mut best = &scores[0];
    for candidate in &scores[1..] {
        if candidate.score > best.score {
            best = candidate;
        }
    }
    best.product_type
}
