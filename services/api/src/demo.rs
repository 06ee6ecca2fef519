use chrono::{Local, NaiveDate};
use clap::Args;
use feaso::appraisal::{
    AppraisalRequest, AppraisalService, CostInputs, FinanceInputs, PlanningInputs, ProductType,
    SalesInputs, Scenario, Site, SiteAppraisal, SpecLevel, TaxInputs,
};
use feaso::config::AppConfig;
use feaso::error::AppError;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AppraiseArgs {
    /// JSON file holding `{ "site": ..., "scenarios": [...] }`
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Write the scenario comparison table to this CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Date printed on the pack (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) prepared_on: Option<NaiveDate>,
    /// Print the full appraisal as JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Date printed on the pack (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) prepared_on: Option<NaiveDate>,
    /// Score the sample site only, skipping scenario feasibility.
    #[arg(long)]
    pub(crate) skip_scenarios: bool,
}

pub(crate) fn run_appraise(args: AppraiseArgs) -> Result<(), AppError> {
    let AppraiseArgs {
        input,
        csv,
        prepared_on,
        json,
    } = args;

    let config = AppConfig::load()?;
    let service = AppraisalService::from_config(&config.appraisal)?;
    let request = AppraisalRequest::from_path(&input)?;
    let prepared_on = prepared_on.unwrap_or_else(|| Local::now().date_naive());

    let appraisal = service.appraise(&request, prepared_on);

    if json {
        match serde_json::to_string_pretty(&appraisal) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => return Err(std::io::Error::other(err).into()),
        }
    } else {
        render_appraisal(&appraisal);
    }

    if let Some(path) = csv {
        let writer = BufWriter::new(File::create(&path)?);
        appraisal.write_comparison_csv(writer)?;
        println!("\nComparison written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        prepared_on,
        skip_scenarios,
    } = args;

    let prepared_on = prepared_on.unwrap_or_else(|| Local::now().date_naive());
    let mut request = sample_request();
    if skip_scenarios {
        request.scenarios.clear();
    }

    println!("Feasibility calculator demo");
    let appraisal = AppraisalService::default().appraise(&request, prepared_on);
    render_appraisal(&appraisal);

    Ok(())
}

fn render_appraisal(appraisal: &SiteAppraisal) {
    let site = &appraisal.site;
    println!("\n{} ({})", display_or(&site.name, &site.id), appraisal.prepared_on);
    if !site.address.is_empty() {
        println!("{}", site.address);
    }
    println!(
        "Council {} | Zone {} | {:.0} m² | {:.1} m frontage | {:.1} m depth{}",
        site.council,
        site.zone,
        site.area_sqm,
        site.frontage_m,
        site.depth_m,
        if site.is_corner { " | corner" } else { "" }
    );
    if !site.overlays.is_empty() {
        println!("Overlays: {}", site.overlays.join(", "));
    }

    match &appraisal.council {
        Some(profile) => println!(
            "Council stance: {} - {}",
            profile.category.label(),
            profile.notes
        ),
        None => println!("Council stance: no profile on file"),
    }

    println!("\nYield potential");
    for score in &appraisal.yield_scores {
        println!(
            "- {}: {}/100 ({}) {}",
            score.product_type.label(),
            score.score,
            score.band().label(),
            score.notes
        );
    }
    println!("Best fit: {}", appraisal.recommended_product.label());

    if appraisal.scenarios.is_empty() {
        println!("\nScenarios: none");
        return;
    }

    println!("\nScenario comparison");
    for entry in &appraisal.scenarios {
        let feasibility = &entry.feasibility;
        let margin = feasibility
            .margin_on_cost_percent
            .map(|margin| format!("{margin:.1}%"))
            .unwrap_or_else(|| "undefined".to_string());
        println!(
            "- {} | {} x{} | GRV ${:.0} | TDC ${:.0} | profit ${:.0} | margin {} | {}",
            display_or(&entry.scenario_name, &entry.scenario_id),
            entry.product_type.label(),
            entry.dwellings,
            feasibility.gross_realisation,
            feasibility.total_development_cost,
            feasibility.profit,
            margin,
            feasibility.bankability_flag.label()
        );
        println!(
            "  Peak debt ${:.0} | finance ${:.0} | GST ${:.0}",
            feasibility.peak_debt_estimate,
            feasibility.breakdown.finance,
            feasibility.breakdown.gst_estimate
        );
        for note in &feasibility.notes {
            println!("  {note}");
        }

        if entry.rescode.compliant {
            println!("  ResCode: compliant");
        } else {
            println!("  ResCode issues:");
            for issue in &entry.rescode.issues {
                println!("    - {issue}");
            }
        }
        for suggestion in &entry.rescode.suggestions {
            println!("    > {suggestion}");
        }
    }

    let bankable = appraisal.bankable_scenarios().count();
    println!(
        "\n{bankable} of {} scenario(s) clear the 18% margin hurdle",
        appraisal.scenarios.len()
    );
}

fn display_or<'a>(preferred: &'a str, fallback: &'a str) -> &'a str {
    if preferred.is_empty() {
        fallback
    } else {
        preferred
    }
}

fn sample_request() -> AppraisalRequest {
    let site = Site {
        id: "site-demo".to_string(),
        name: "Bentleigh East - Eastwood St".to_string(),
        address: "14 Eastwood St, Bentleigh East VIC".to_string(),
        council: "Monash".to_string(),
        zone: "GRZ1".to_string(),
        overlays: Vec::new(),
        area_sqm: 700.0,
        frontage_m: 16.0,
        depth_m: 43.0,
        is_corner: false,
        easements_notes: None,
    };

    let planning_inputs = PlanningInputs {
        site_coverage_percent: 55.0,
        permeability_percent: 25.0,
        garden_area_percent: 36.0,
        pos_per_dwelling_sqm: 50.0,
        secluded_pos_sqm: 30.0,
        secluded_pos_min_width_m: 3.5,
        neighbour_front_setbacks_m: None,
    };

    let scenario = Scenario {
        id: "scen-demo".to_string(),
        site_id: site.id.clone(),
        name: "Triplex - High-End Spec".to_string(),
        product_type: ProductType::Triplex,
        dwellings: 3,
        storeys: 2,
        gross_floor_area_per_dwelling: 150.0,
        spec_level: SpecLevel::HighEnd,
        includes_basement: false,
        basement_area_sqm: None,
        planning_inputs,
        cost_inputs: CostInputs {
            land_price: 1_500_000.0,
            stamp_duty: 82_500.0,
            legal_and_dd: 5_000.0,
            build_rate_per_sqm: 3_000.0,
            internal_build_rate_per_sqm: None,
            builder_margin_percent: 20.0,
            soft_costs_percent: 15.0,
            soft_costs_overrides: None,
            contingency_percent: 5.0,
            basement_rate_per_sqm: None,
        },
        finance_inputs: FinanceInputs {
            land_lvr_percent: 60.0,
            construction_lvr_percent: 100.0,
            interest_rate_percent: 7.5,
            project_duration_months: 18.0,
            drawdown_profile: None,
        },
        sales_inputs: SalesInputs {
            dwellings: 3,
            avg_sale_price_per_dwelling: 1_200_000.0,
            selling_cost_percent: 2.5,
        },
        tax_inputs: TaxInputs {
            gst_margin_scheme: true,
        },
    };

    AppraisalRequest {
        site,
        scenarios: vec![scenario],
    }
}
