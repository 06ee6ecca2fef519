use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::appraisal::domain::{
    CostInputs, FinanceInputs, PlanningInputs, ProductType, SalesInputs, Scenario, Site,
    SpecLevel, TaxInputs,
};
use crate::appraisal::{appraisal_router, AppraisalService};

pub(super) fn site() -> Site {
    Site {
        id: "site-1".to_string(),
        name: "Test Site".to_string(),
        address: "123 Test St".to_string(),
        council: "Bayside".to_string(),
        zone: "GRZ1".to_string(),
        overlays: Vec::new(),
        area_sqm: 800.0,
        frontage_m: 20.0,
        depth_m: 40.0,
        is_corner: false,
        easements_notes: None,
    }
}

pub(super) fn planning_inputs() -> PlanningInputs {
    PlanningInputs {
        site_coverage_percent: 50.0,
        permeability_percent: 30.0,
        garden_area_percent: 40.0,
        pos_per_dwelling_sqm: 50.0,
        secluded_pos_sqm: 30.0,
        secluded_pos_min_width_m: 4.0,
        neighbour_front_setbacks_m: None,
    }
}

pub(super) fn scenario() -> Scenario {
    Scenario {
        id: "scenario-1".to_string(),
        site_id: "site-1".to_string(),
        name: "Triplex - High-End Spec".to_string(),
        product_type: ProductType::Triplex,
        dwellings: 3,
        storeys: 2,
        gross_floor_area_per_dwelling: 150.0,
        spec_level: SpecLevel::HighEnd,
        includes_basement: false,
        basement_area_sqm: None,
        planning_inputs: planning_inputs(),
        cost_inputs: CostInputs {
            land_price: 2_000_000.0,
            stamp_duty: 110_000.0,
            legal_and_dd: 5_000.0,
            build_rate_per_sqm: 3_500.0,
            internal_build_rate_per_sqm: None,
            builder_margin_percent: 20.0,
            soft_costs_percent: 15.0,
            soft_costs_overrides: None,
            contingency_percent: 5.0,
            basement_rate_per_sqm: None,
        },
        finance_inputs: FinanceInputs {
            land_lvr_percent: 65.0,
            construction_lvr_percent: 100.0,
            interest_rate_percent: 7.5,
            project_duration_months: 18.0,
            drawdown_profile: None,
        },
        sales_inputs: SalesInputs {
            dwellings: 3,
            avg_sale_price_per_dwelling: 1_500_000.0,
            selling_cost_percent: 2.5,
        },
        tax_inputs: TaxInputs {
            gst_margin_scheme: true,
        },
    }
}

/// Same build as `scenario()` but priced to clear an 18% margin.
pub(super) fn profitable_scenario() -> Scenario {
    let mut scenario = scenario();
    scenario.id = "scenario-2".to_string();
    scenario.name = "Triplex - Premium Pricing".to_string();
    scenario.sales_inputs.avg_sale_price_per_dwelling = 2_500_000.0;
    scenario
}

/// Every cost input zeroed, leaving no denominator for the margin.
pub(super) fn zero_cost_scenario() -> Scenario {
    let mut scenario = scenario();
    scenario.id = "scenario-zero".to_string();
    scenario.dwellings = 0;
    scenario.cost_inputs.land_price = 0.0;
    scenario.cost_inputs.stamp_duty = 0.0;
    scenario.cost_inputs.legal_and_dd = 0.0;
    scenario.cost_inputs.build_rate_per_sqm = 0.0;
    scenario
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn router() -> axum::Router {
    appraisal_router(Arc::new(AppraisalService::default()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
