use serde::{Deserialize, Deserializer, Serialize};

/// Physical and administrative description of a candidate development site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub council: String,
    /// Planning zone code such as `GRZ1` or `NRZ3`.
    pub zone: String,
    /// Accepts a list of codes or a single comma-separated string.
    #[serde(default, deserialize_with = "overlay_codes")]
    pub overlays: Vec<String>,
    pub area_sqm: f64,
    pub frontage_m: f64,
    pub depth_m: f64,
    #[serde(default)]
    pub is_corner: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easements_notes: Option<String>,
}

impl Site {
    /// Split a stored overlay string (`"HO, VPO"`) into overlay codes.
    pub fn parse_overlays(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn overlay_codes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Overlays {
        Codes(Vec<String>),
        Joined(String),
    }

    Ok(match Overlays::deserialize(deserializer)? {
        Overlays::Codes(codes) => codes,
        Overlays::Joined(raw) => Site::parse_overlays(&raw),
    })
}

/// Dwelling-count product types assessed for every site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Duplex,
    Triplex,
    Quadplex,
}

impl ProductType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Duplex, Self::Triplex, Self::Quadplex]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Duplex => "Duplex",
            Self::Triplex => "Triplex",
            Self::Quadplex => "Quadplex",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecLevel {
    HighEnd,
    Luxury,
}

/// Built-form dimensions relevant to the quantitative ResCode standards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningInputs {
    pub site_coverage_percent: f64,
    pub permeability_percent: f64,
    pub garden_area_percent: f64,
    pub pos_per_dwelling_sqm: f64,
    pub secluded_pos_sqm: f64,
    pub secluded_pos_min_width_m: f64,
    /// Left and right neighbour front setbacks. Recorded only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbour_front_setbacks_m: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostInputs {
    pub land_price: f64,
    pub stamp_duty: f64,
    #[serde(rename = "legalAndDD")]
    pub legal_and_dd: f64,
    pub build_rate_per_sqm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_build_rate_per_sqm: Option<f64>,
    pub builder_margin_percent: f64,
    pub soft_costs_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft_costs_overrides: Option<SoftCostsBreakdown>,
    pub contingency_percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basement_rate_per_sqm: Option<f64>,
}

/// Itemised soft costs that replace the percentage allowance when supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftCostsBreakdown {
    pub architect: f64,
    pub town_planning: f64,
    pub open_space_contribution: f64,
    pub services_contributions: f64,
    pub lsl_levy: f64,
    pub other: f64,
}

impl SoftCostsBreakdown {
    pub fn total(&self) -> f64 {
        self.architect
            + self.town_planning
            + self.open_space_contribution
            + self.services_contributions
            + self.lsl_levy
            + self.other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawdownProfile {
    Linear,
    FrontLoaded,
    BackLoaded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceInputs {
    pub land_lvr_percent: f64,
    pub construction_lvr_percent: f64,
    pub interest_rate_percent: f64,
    pub project_duration_months: f64,
    /// Carried for the caller's records; the finance estimate uses a fixed utilisation factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawdown_profile: Option<DrawdownProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesInputs {
    /// Dwellings offered for sale; may differ from the scenario's built dwellings.
    pub dwellings: u32,
    pub avg_sale_price_per_dwelling: f64,
    pub selling_cost_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxInputs {
    pub gst_margin_scheme: bool,
}

/// A proposed development for a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub site_id: String,
    #[serde(default)]
    pub name: String,
    pub product_type: ProductType,
    pub dwellings: u32,
    pub storeys: u32,
    pub gross_floor_area_per_dwelling: f64,
    pub spec_level: SpecLevel,
    #[serde(default)]
    pub includes_basement: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basement_area_sqm: Option<f64>,
    pub planning_inputs: PlanningInputs,
    pub cost_inputs: CostInputs,
    pub finance_inputs: FinanceInputs,
    pub sales_inputs: SalesInputs,
    pub tax_inputs: TaxInputs,
}

/// Suitability of a site for one product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldScore {
    pub site_id: String,
    pub product_type: ProductType,
    /// Always within 0..=100.
    pub score: u8,
    pub notes: String,
}

impl YieldScore {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub const fn from_score(score: u8) -> Self {
        if score >= 70 {
            Self::Strong
        } else if score >= 40 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResCodeCheckResult {
    pub compliant: bool,
    /// Mirrors `compliant`; only the quantitative standards are tested.
    pub deemed_to_comply: bool,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Lender appetite implied by the margin on cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bankability {
    Red,
    Amber,
    Green,
}

impl Bankability {
    pub fn from_margin(margin_on_cost_percent: f64) -> Self {
        if margin_on_cost_percent < 15.0 {
            Self::Red
        } else if margin_on_cost_percent < 18.0 {
            Self::Amber
        } else {
            Self::Green
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Amber => "Amber",
            Self::Green => "Green",
        }
    }

    pub const fn note(self) -> &'static str {
        match self {
            Self::Red => "Margin is below 15% - High Risk / Unbankable.",
            Self::Amber => "Margin is tight (15-18%).",
            Self::Green => "Healthy margin (>18%).",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub land_and_acquisition: f64,
    /// Build cost including builder margin.
    pub construction: f64,
    pub soft_costs: f64,
    pub contingency: f64,
    pub finance: f64,
    pub gst_estimate: f64,
    pub selling_costs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityResult {
    pub scenario_id: String,
    pub gross_realisation: f64,
    pub total_development_cost: f64,
    pub net_sales_value: f64,
    pub profit: f64,
    /// `None` when the total development cost is zero.
    pub margin_on_cost_percent: Option<f64>,
    pub peak_debt_estimate: f64,
    pub bankability_flag: Bankability,
    pub breakdown: CostBreakdown,
    pub notes: Vec<String>,
}
