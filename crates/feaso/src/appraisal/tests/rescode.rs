use super::common::*;
use crate::appraisal::ComplianceChecker;

const GARDEN_ISSUE: &str = "Garden area below mandatory 35% for GRZ lots > 650m².";

#[test]
fn compliant_inputs_raise_nothing() {
    let result = ComplianceChecker::check(&site(), &planning_inputs());

    assert!(result.compliant);
    assert!(result.deemed_to_comply);
    assert!(result.issues.is_empty());
    assert!(result.suggestions.is_empty());
}

#[test]
fn excessive_site_coverage_is_an_issue() {
    let mut planning = planning_inputs();
    planning.site_coverage_percent = 70.0;

    let result = ComplianceChecker::check(&site(), &planning);

    assert!(!result.compliant);
    assert!(!result.deemed_to_comply);
    assert_eq!(result.issues, vec!["Site coverage exceeds 60% maximum."]);
    assert_eq!(
        result.suggestions,
        vec!["Reduce built form to < 60% coverage (target ≤ 58%)."]
    );
}

#[test]
fn near_limit_site_coverage_only_suggests() {
    let mut planning = planning_inputs();
    planning.site_coverage_percent = 59.0;

    let result = ComplianceChecker::check(&site(), &planning);

    assert!(result.compliant);
    assert!(result.issues.is_empty());
    assert_eq!(
        result.suggestions,
        vec!["Site coverage is compliant but high (>58%). Consider reducing."]
    );
}

#[test]
fn coverage_of_exactly_sixty_is_compliant() {
    let mut planning = planning_inputs();
    planning.site_coverage_percent = 60.0;

    let result = ComplianceChecker::check(&site(), &planning);

    assert!(result.compliant);
    assert_eq!(result.suggestions.len(), 1);
}

#[test]
fn low_permeability_is_an_issue() {
    let mut planning = planning_inputs();
    planning.permeability_percent = 10.0;

    let result = ComplianceChecker::check(&site(), &planning);

    assert!(!result.compliant);
    assert!(result
        .issues
        .contains(&"Permeability below 20% minimum.".to_string()));
}

#[test]
fn garden_area_enforced_on_large_grz_lots() {
    let mut planning = planning_inputs();
    planning.garden_area_percent = 20.0;

    let result = ComplianceChecker::check(&site(), &planning);

    assert!(!result.compliant);
    assert!(result.issues.contains(&GARDEN_ISSUE.to_string()));
}

#[test]
fn garden_area_zone_match_ignores_case() {
    let mut site = site();
    site.zone = "grz2".to_string();
    let mut planning = planning_inputs();
    planning.garden_area_percent = 20.0;

    let result = ComplianceChecker::check(&site, &planning);

    assert!(result.issues.contains(&GARDEN_ISSUE.to_string()));
}

#[test]
fn garden_area_not_enforced_outside_grz_or_on_small_lots() {
    let mut planning = planning_inputs();
    planning.garden_area_percent = 20.0;

    let mut nrz_site = site();
    nrz_site.zone = "NRZ1".to_string();
    let result = ComplianceChecker::check(&nrz_site, &planning);
    assert!(result.compliant);

    let mut small_site = site();
    small_site.area_sqm = 650.0;
    let result = ComplianceChecker::check(&small_site, &planning);
    assert!(result.compliant);
    assert!(!result.issues.contains(&GARDEN_ISSUE.to_string()));
}

#[test]
fn every_rule_is_evaluated_without_short_circuit() {
    let mut planning = planning_inputs();
    planning.site_coverage_percent = 75.0;
    planning.permeability_percent = 5.0;
    planning.garden_area_percent = 10.0;
    planning.pos_per_dwelling_sqm = 20.0;
    planning.secluded_pos_sqm = 12.0;
    planning.secluded_pos_min_width_m = 2.0;

    let result = ComplianceChecker::check(&site(), &planning);

    assert!(!result.compliant);
    assert_eq!(result.issues.len(), 6);
    assert_eq!(result.suggestions.len(), 6);
    assert_eq!(
        result.issues.last().map(String::as_str),
        Some("Secluded POS minimum width is less than 3m.")
    );
}

#[test]
fn negative_inputs_pass_through_to_rule_outcomes() {
    let mut planning = planning_inputs();
    planning.site_coverage_percent = -10.0;
    planning.secluded_pos_sqm = -1.0;

    let result = ComplianceChecker::check(&site(), &planning);

    assert_eq!(result.issues, vec!["Secluded POS below 25m²."]);
}
