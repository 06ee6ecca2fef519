use super::domain::{PlanningInputs, ResCodeCheckResult, Site};

const MAX_SITE_COVERAGE_PERCENT: f64 = 60.0;
const SITE_COVERAGE_TARGET_PERCENT: f64 = 58.0;
const MIN_PERMEABILITY_PERCENT: f64 = 20.0;
const MIN_GARDEN_AREA_PERCENT: f64 = 35.0;
const GARDEN_AREA_TRIGGER_SQM: f64 = 650.0;
const MIN_POS_PER_DWELLING_SQM: f64 = 40.0;
const MIN_SECLUDED_POS_SQM: f64 = 25.0;
const MIN_SECLUDED_POS_WIDTH_M: f64 = 3.0;

/// Checks planning inputs against the quantitative ResCode standards.
///
/// Every rule is evaluated; a failing rule never hides later ones. Each issue is paired
/// with a suggestion, and a near-limit site coverage raises a suggestion on its own.
pub struct ComplianceChecker;

impl ComplianceChecker {
    pub fn check(site: &Site, planning: &PlanningInputs) -> ResCodeCheckResult {
        let mut findings = Findings::default();

        if planning.site_coverage_percent > MAX_SITE_COVERAGE_PERCENT {
            findings.issue(
                "Site coverage exceeds 60% maximum.",
                "Reduce built form to < 60% coverage (target ≤ 58%).",
            );
        } else if planning.site_coverage_percent > SITE_COVERAGE_TARGET_PERCENT {
            findings.suggest("Site coverage is compliant but high (>58%). Consider reducing.");
        }

        if planning.permeability_percent < MIN_PERMEABILITY_PERCENT {
            findings.issue(
                "Permeability below 20% minimum.",
                "Increase permeable surfaces (garden, permeable paving).",
            );
        }

        // Mandatory garden area requirement, separate from the Clause 55 standards.
        if garden_area_applies(site) && planning.garden_area_percent < MIN_GARDEN_AREA_PERCENT {
            findings.issue(
                "Garden area below mandatory 35% for GRZ lots > 650m².",
                "Increase garden area to ≥ 35%. This is non-negotiable.",
            );
        }

        if planning.pos_per_dwelling_sqm < MIN_POS_PER_DWELLING_SQM {
            findings.issue(
                "Private open space per dwelling below 40m².",
                "Increase total POS per dwelling.",
            );
        }

        if planning.secluded_pos_sqm < MIN_SECLUDED_POS_SQM {
            findings.issue(
                "Secluded POS below 25m².",
                "Ensure at least 25m² of secluded POS.",
            );
        }

        if planning.secluded_pos_min_width_m < MIN_SECLUDED_POS_WIDTH_M {
            findings.issue(
                "Secluded POS minimum width is less than 3m.",
                "Widen secluded POS area.",
            );
        }

        findings.into_result()
    }
}

fn garden_area_applies(site: &Site) -> bool {
    site.zone.to_uppercase().contains("GRZ") && site.area_sqm > GARDEN_AREA_TRIGGER_SQM
}

#[derive(Default)]
struct Findings {
    issues: Vec<String>,
    suggestions: Vec<String>,
}

impl Findings {
    fn issue(&mut self, issue: &str, suggestion: &str) {
        self.issues.push(issue.to_string());
        self.suggestions.push(suggestion.to_string());
    }

    fn suggest(&mut self, suggestion: &str) {
        self.suggestions.push(suggestion.to_string());
    }

    fn into_result(self) -> ResCodeCheckResult {
        let compliant = self.issues.is_empty();
        ResCodeCheckResult {
            compliant,
            deemed_to_comply: compliant,
            issues: self.issues,
            suggestions: self.suggestions,
        }
    }
}
