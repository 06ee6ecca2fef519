use super::domain::{
    Bankability, CostBreakdown, FeasibilityResult, FinanceInputs, Scenario, Site,
};

/// Share of peak debt assumed drawn on average across the project.
pub const FINANCE_UTILISATION_FACTOR: f64 = 0.65;

/// GST is one eleventh of a GST-inclusive amount.
const GST_DIVISOR: f64 = 11.0;

/// Cost, revenue and finance waterfall for a development scenario.
pub struct FeasibilityCalculator;

impl FeasibilityCalculator {
    pub fn calculate(_site: &Site, scenario: &Scenario) -> FeasibilityResult {
        let costs = &scenario.cost_inputs;
        let finance = &scenario.finance_inputs;
        let sales = &scenario.sales_inputs;

        let total_gfa = scenario.dwellings as f64 * scenario.gross_floor_area_per_dwelling;
        let basement_area = if scenario.includes_basement {
            scenario.basement_area_sqm.unwrap_or(0.0)
        } else {
            0.0
        };
        let base_build_cost = total_gfa * costs.build_rate_per_sqm
            + basement_area * costs.basement_rate_per_sqm.unwrap_or(0.0);
        let builder_margin = base_build_cost * (costs.builder_margin_percent / 100.0);
        let construction_base = base_build_cost + builder_margin;

        let soft_costs = match &costs.soft_costs_overrides {
            Some(overrides) => overrides.total(),
            None => construction_base * costs.soft_costs_percent / 100.0,
        };

        let contingency = (construction_base + soft_costs) * (costs.contingency_percent / 100.0);
        let land_and_acquisition = costs.land_price + costs.stamp_duty + costs.legal_and_dd;
        let gross_construction = construction_base + soft_costs + contingency;

        let peak_debt_estimate = peak_debt(land_and_acquisition, gross_construction, finance);
        let finance_cost = finance_cost(
            peak_debt_estimate,
            finance.interest_rate_percent,
            finance.project_duration_months,
        );

        let gross_sales = sales.dwellings as f64 * sales.avg_sale_price_per_dwelling;
        let selling_costs = gross_sales * sales.selling_cost_percent / 100.0;
        let gst_estimate = gst(
            gross_sales,
            costs.land_price,
            scenario.tax_inputs.gst_margin_scheme,
        );
        let net_sales_value = gross_sales - selling_costs - gst_estimate;

        let total_development_cost = land_and_acquisition + gross_construction + finance_cost;
        let profit = net_sales_value - total_development_cost;
        let margin_on_cost_percent = margin_on_cost(profit, total_development_cost);

        let (bankability_flag, note) = match margin_on_cost_percent {
            Some(margin) => {
                let flag = Bankability::from_margin(margin);
                (flag, flag.note())
            }
            None => (
                Bankability::Red,
                "Margin is undefined because total development cost is zero - Unbankable.",
            ),
        };

        FeasibilityResult {
            scenario_id: scenario.id.clone(),
            gross_realisation: gross_sales,
            total_development_cost,
            net_sales_value,
            profit,
            margin_on_cost_percent,
            peak_debt_estimate,
            bankability_flag,
            breakdown: CostBreakdown {
                land_and_acquisition,
                construction: construction_base,
                soft_costs,
                contingency,
                finance: finance_cost,
                gst_estimate,
                selling_costs,
            },
            notes: vec![note.to_string()],
        }
    }
}

/// Both facilities drawn to their nominal LVR against their own cost base.
fn peak_debt(land_cost: f64, construction_cost: f64, finance: &FinanceInputs) -> f64 {
    let land_loan = land_cost * (finance.land_lvr_percent / 100.0);
    let construction_loan = construction_cost * (finance.construction_lvr_percent / 100.0);
    land_loan + construction_loan
}

fn finance_cost(peak_debt: f64, rate_percent: f64, duration_months: f64) -> f64 {
    let annual_rate = rate_percent / 100.0;
    let years = duration_months / 12.0;
    peak_debt * FINANCE_UTILISATION_FACTOR * annual_rate * years
}

fn gst(gross_sales: f64, land_price: f64, margin_scheme: bool) -> f64 {
    if margin_scheme {
        ((gross_sales - land_price) / GST_DIVISOR).max(0.0)
    } else {
        gross_sales / GST_DIVISOR
    }
}

fn margin_on_cost(profit: f64, total_development_cost: f64) -> Option<f64> {
    if total_development_cost == 0.0 {
        None
    } else {
        Some(profit / total_development_cost * 100.0)
    }
}
