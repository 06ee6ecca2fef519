use super::domain::{ProductType, Site, YieldScore};

/// Scores a site's frontage, area and depth against each product type.
pub struct YieldScorer;

impl YieldScorer {
    /// One score per product type, in Duplex, Triplex, Quadplex order.
    pub fn score_all(site: &Site) -> [YieldScore; 3] {
        ProductType::ordered().map(|product| Self::score(site, product))
    }

    pub fn score(site: &Site, product: ProductType) -> YieldScore {
        let tally = match product {
            ProductType::Duplex => score_duplex(site),
            ProductType::Triplex => score_triplex(site),
            ProductType::Quadplex => score_quadplex(site),
        };

        YieldScore {
            site_id: site.id.clone(),
            product_type: product,
            score: tally.clamped(),
            notes: tally.notes.join(" "),
        }
    }
}

struct Tally {
    score: i32,
    notes: Vec<&'static str>,
}

impl Tally {
    fn starting_at(base: i32) -> Self {
        Self {
            score: base,
            notes: Vec::new(),
        }
    }

    fn adjust(&mut self, delta: i32, note: &'static str) {
        self.score += delta;
        self.notes.push(note);
    }

    fn clamped(&self) -> u8 {
        self.score.clamp(0, 100) as u8
    }
}

fn score_duplex(site: &Site) -> Tally {
    let mut tally = Tally::starting_at(50);

    if site.frontage_m >= 14.0 {
        tally.adjust(30, "Excellent frontage (14m+) for side-by-side.");
    } else if site.frontage_m >= 12.5 {
        tally.adjust(10, "Adequate frontage.");
    } else {
        tally.adjust(-30, "Frontage narrow for side-by-side (<12.5m).");
    }

    if (600.0..=750.0).contains(&site.area_sqm) {
        tally.adjust(20, "Ideal site area.");
    } else if site.area_sqm < 600.0 {
        tally.adjust(-20, "Site area small.");
    }

    if site.zone.contains("GRZ") || site.zone.contains("NRZ") {
        tally.score += 10;
    }

    tally
}

fn score_triplex(site: &Site) -> Tally {
    let mut tally = Tally::starting_at(40);

    // 15m..16m frontage is workable but earns nothing either way.
    if site.frontage_m >= 16.0 {
        tally.adjust(30, "Strong frontage for driveway + front dwelling.");
    } else if site.frontage_m < 15.0 {
        tally.adjust(-30, "Frontage likely too narrow for triplex.");
    }

    if site.area_sqm >= 750.0 {
        tally.adjust(20, "Good site area.");
    } else {
        tally.adjust(-20, "Area tight for 3 dwellings.");
    }

    if site.depth_m >= 45.0 {
        tally.adjust(10, "Good depth.");
    } else {
        tally.adjust(0, "Depth may be limiting.");
    }

    tally
}

fn score_quadplex(site: &Site) -> Tally {
    let mut tally = Tally::starting_at(30);

    if site.frontage_m >= 20.0 || site.is_corner {
        tally.adjust(40, "Excellent frontage/corner for 4 dwellings.");
    } else {
        tally.adjust(-40, "Frontage insufficient for quadplex.");
    }

    if site.area_sqm >= 900.0 {
        tally.adjust(30, "Area supports density.");
    } else {
        tally.adjust(-30, "Area too small.");
    }

    tally
}
