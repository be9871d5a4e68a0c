//! Static lookup tables
//!
//! All the fixed data the generators and the classifier read from. Order
//! matters wherever a table is scanned for the first match.

use crate::report::Industry;

/// Descriptor used when no domain keyword matches
pub const GENERAL_DESCRIPTOR: &str = "general";

/// Domain keyword -> industry descriptor, scanned in order, first hit wins
pub static DOMAIN_KEYWORDS: &[(&str, &str)] = &[
    ("shopify", "ecommerce platform"),
    ("store", "retail ecommerce"),
    ("shop", "online store"),
    ("beauty", "beauty cosmetics"),
    ("fashion", "clothing apparel"),
    ("tech", "technology electronics"),
    ("home", "home furniture decor"),
    ("fitness", "fitness health wellness"),
];

/// Industry descriptor -> representative product names
pub static PRODUCT_CATALOGS: &[(&str, [&str; 4])] = &[
    ("beauty cosmetics", ["Foundation", "Lipstick", "Skincare Set", "Eye Shadow"]),
    ("clothing apparel", ["T-Shirt", "Jeans", "Dress", "Sneakers"]),
    ("technology electronics", ["Smartphone", "Laptop", "Headphones", "Tablet"]),
    ("home furniture decor", ["Sofa", "Dining Table", "Bed Frame", "Lamp"]),
    ("fitness health wellness", ["Protein Powder", "Yoga Mat", "Dumbbells", "Supplement"]),
];

pub static GENERIC_PRODUCTS: [&str; 4] = ["Product 1", "Product 2", "Product 3", "Product 4"];

/// Classifier synonyms in priority order. `General` is the implicit default.
pub static INDUSTRY_SYNONYMS: &[(Industry, &[&str])] = &[
    (Industry::Fashion, &["fashion", "clothing", "apparel"]),
    (Industry::Beauty, &["beauty", "cosmetics", "skincare"]),
    (Industry::Electronics, &["electronics", "tech", "gadget"]),
    (Industry::Fitness, &["fitness", "sports", "workout"]),
    (Industry::Home, &["home", "furniture", "decor"]),
];

pub static INDUSTRY_COMPETITORS: &[(Industry, &[&str])] = &[
    (Industry::Fashion, &["zara.com", "hm.com", "asos.com", "uniqlo.com"]),
    (Industry::Electronics, &["apple.com", "samsung.com", "sony.com", "lg.com"]),
    (Industry::Beauty, &["sephora.com", "ulta.com", "beautylish.com", "glossier.com"]),
    (Industry::Fitness, &["nike.com", "adidas.com", "lululemon.com", "underarmour.com"]),
    (Industry::Home, &["wayfair.com", "ikea.com", "target.com", "homedepot.com"]),
];

pub static GENERIC_COMPETITORS: &[&str] = &["competitor1.com", "competitor2.com", "competitor3.com"];

pub static COMPETITOR_KEYWORDS: [&str; 3] = ["brand keyword", "product category", "competitor term"];
pub static COMPETITOR_AD_CHANNELS: [&str; 3] = ["Google Ads", "Facebook Ads", "Instagram Ads"];

/// Per-industry ad performance baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineMetrics {
    pub roas: f64,
    pub ctr: f64,
    pub cpc: f64,
    pub cvr: f64,
}

const GENERAL_BASELINE: BaselineMetrics = BaselineMetrics { roas: 240.0, ctr: 2.0, cpc: 0.8, cvr: 2.4 };

static BASELINES: &[(Industry, BaselineMetrics)] = &[
    (Industry::Fashion, BaselineMetrics { roas: 280.0, ctr: 2.1, cpc: 0.75, cvr: 2.8 }),
    (Industry::Beauty, BaselineMetrics { roas: 320.0, ctr: 2.8, cpc: 0.85, cvr: 3.2 }),
    (Industry::Electronics, BaselineMetrics { roas: 250.0, ctr: 1.9, cpc: 1.2, cvr: 2.1 }),
    (Industry::Fitness, BaselineMetrics { roas: 290.0, ctr: 2.3, cpc: 0.65, cvr: 2.9 }),
    (Industry::Home, BaselineMetrics { roas: 260.0, ctr: 2.0, cpc: 0.95, cvr: 2.5 }),
    (Industry::General, GENERAL_BASELINE),
];

pub static MARKET_TRENDS: [&str; 3] = ["sustainable products", "mobile shopping", "personalization"];

pub static SEASONALITY: [(&str, u32); 12] = [
    ("Jan", 85), ("Feb", 78), ("Mar", 92), ("Apr", 88), ("May", 95), ("Jun", 82),
    ("Jul", 75), ("Aug", 80), ("Sep", 90), ("Oct", 98), ("Nov", 100), ("Dec", 95),
];

/// (age bucket, share %, engagement index). Shares sum to 100.
pub static AGE_GROUPS: [(&str, u32, u32); 5] = [
    ("18-24", 15, 85),
    ("25-34", 35, 92),
    ("35-44", 28, 88),
    ("45-54", 15, 75),
    ("55+", 7, 65),
];

/// (region, share %, growth %). Shares sum to 100.
pub static GEO_DISTRIBUTION: [(&str, u32, u32); 4] = [
    ("North America", 45, 12),
    ("Europe", 30, 18),
    ("Asia Pacific", 20, 25),
    ("Others", 5, 8),
];

/// (channel, current %, optimized %, roi)
pub static BUDGET_CHANNELS: [(&str, u32, u32, f64); 3] = [
    ("Google Ads", 35, 45, 4.2),
    ("Meta Ads", 40, 35, 3.8),
    ("TikTok Ads", 25, 20, 2.9),
];

/// Product names for an industry descriptor, generic names when unknown
pub fn products_for(descriptor: &str) -> &'static [&'static str; 4] {
    PRODUCT_CATALOGS
        .iter()
        .find(|(d, _)| *d == descriptor)
        .map(|(_, names)| names)
        .unwrap_or(&GENERIC_PRODUCTS)
}

/// Competitor domains for an industry, generic list when the industry has none
pub fn competitors_for(industry: Industry) -> &'static [&'static str] {
    INDUSTRY_COMPETITORS
        .iter()
        .find(|(i, _)| *i == industry)
        .map(|(_, domains)| *domains)
        .unwrap_or(GENERIC_COMPETITORS)
}

pub fn baseline_for(industry: Industry) -> BaselineMetrics {
    BASELINES
        .iter()
        .find(|(i, _)| *i == industry)
        .map(|(_, b)| *b)
        .unwrap_or(GENERAL_BASELINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demographic_shares_sum_to_100() {
        let age_total: u32 = AGE_GROUPS.iter().map(|(_, share, _)| share).sum();
        let geo_total: u32 = GEO_DISTRIBUTION.iter().map(|(_, share, _)| share).sum();
        assert_eq!(age_total, 100);
        assert_eq!(geo_total, 100);
    }

    #[test]
    fn test_budget_split_sums_to_100() {
        let current: u32 = BUDGET_CHANNELS.iter().map(|c| c.1).sum();
        let optimized: u32 = BUDGET_CHANNELS.iter().map(|c| c.2).sum();
        assert_eq!(current, 100);
        assert_eq!(optimized, 100);
    }

    #[test]
    fn test_products_for_unknown_descriptor() {
        assert_eq!(products_for("general"), &GENERIC_PRODUCTS);
        assert_eq!(products_for("ecommerce platform"), &GENERIC_PRODUCTS);
        assert_eq!(products_for("clothing apparel")[0], "T-Shirt");
    }

    #[test]
    fn test_every_industry_has_a_baseline() {
        for industry in Industry::ALL {
            assert!(baseline_for(industry).roas > 0.0);
        }
        assert_eq!(baseline_for(Industry::General), GENERAL_BASELINE);
    }

    #[test]
    fn test_general_uses_generic_competitors() {
        assert_eq!(competitors_for(Industry::General), GENERIC_COMPETITORS);
        assert_eq!(competitors_for(Industry::Home).len(), 4);
    }
}
