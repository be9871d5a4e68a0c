use rand::Rng;
use tracing::debug;

use crate::fallback::capitalize;
use crate::market::tenths;
use crate::report::{CompetitorRecord, Industry};
use crate::tables::{competitors_for, COMPETITOR_AD_CHANNELS, COMPETITOR_KEYWORDS};

/// Display name for a competitor domain: suffix stripped, first letter uppercased
pub fn display_name(domain: &str) -> String {
    let stem = domain.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(domain);
    capitalize(stem)
}

/// Build the competitor list for an industry with randomized performance figures
pub fn enrich<R: Rng + ?Sized>(domain: &str, industry: Industry, rng: &mut R) -> Vec<CompetitorRecord> {
    debug!(domain, %industry, "Researching competitors");

    competitors_for(industry)
        .iter()
        .map(|competitor| CompetitorRecord {
            name: display_name(competitor),
            domain: competitor.to_string(),
            estimated_revenue: tenths(rng.gen_range(10..60), "$", "M/month"),
            ad_spend: format!("${}K/month", rng.gen_range(50..250)),
            roas: rng.gen_range(200..500),
            market_share: rng.gen_range(5..20),
            top_keywords: COMPETITOR_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            ad_channels: COMPETITOR_AD_CHANNELS.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}
