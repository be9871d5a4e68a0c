use rand::Rng;
use tracing::debug;

use crate::report::{AgeGroup, Demographics, Industry, MarketReport, RegionShare, SeasonalDemand};
use crate::tables::{AGE_GROUPS, GEO_DISTRIBUTION, MARKET_TRENDS, SEASONALITY};

/// Format a count of tenths as `{prefix}N.N{suffix}` without rounding
pub(crate) fn tenths(value: u32, prefix: &str, suffix: &str) -> String {
    format!("{}{}.{}{}", prefix, value / 10, value % 10, suffix)
}

/// Produce a market report. Size and growth are randomized; trends,
/// seasonality and demographics come from the static tables.
pub fn generate<R: Rng + ?Sized>(keywords: &[String], industry: Industry, rng: &mut R) -> MarketReport {
    debug!(?keywords, %industry, "Gathering market intelligence");

    MarketReport {
        total_market_size: tenths(rng.gen_range(100..600), "$", "B"),
        growth_rate: tenths(rng.gen_range(50..200), "", "%"),
        top_trends: MARKET_TRENDS.iter().map(|s| s.to_string()).collect(),
        seasonality: SEASONALITY
            .iter()
            .map(|(month, demand)| SeasonalDemand {
                month: month.to_string(),
                demand: *demand,
            })
            .collect(),
        demographics: Demographics {
            age_groups: AGE_GROUPS
                .iter()
                .map(|(age, percentage, engagement)| AgeGroup {
                    age: age.to_string(),
                    percentage: *percentage,
                    engagement: *engagement,
                })
                .collect(),
            geo_distribution: GEO_DISTRIBUTION
                .iter()
                .map(|(region, share, growth)| RegionShare {
                    region: region.to_string(),
                    share: *share,
                    growth: *growth,
                })
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_market_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let market = generate(&[], Industry::General, &mut rng);
        assert_eq!(market.top_trends.len(), 3);
        assert_eq!(market.seasonality.len(), 12);
        assert_eq!(market.seasonality[0].month, "Jan");
        assert_eq!(market.seasonality[10].demand, 100);
        assert_eq!(market.demographics.age_groups.len(), 5);
        assert_eq!(market.demographics.geo_distribution.len(), 4);
        let age_total: u32 = market.demographics.age_groups.iter().map(|a| a.percentage).sum();
        assert_eq!(age_total, 100);
    }

    #[test]
    fn test_randomized_figures_in_range() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..2000 {
            let market = generate(&["shoes".to_string()], Industry::Fashion, &mut rng);
            let size: f64 = market
                .total_market_size
                .trim_start_matches('$')
                .trim_end_matches('B')
                .parse()
                .unwrap();
            assert!((10.0..60.0).contains(&size));
            let growth: f64 = market.growth_rate.trim_end_matches('%').parse().unwrap();
            assert!((5.0..20.0).contains(&growth));
        }
    }

    #[test]
    fn test_tenths_format() {
        assert_eq!(tenths(599, "$", "B"), "$59.9B");
        assert_eq!(tenths(50, "", "%"), "5.0%");
    }

    #[test]
    fn test_inputs_do_not_change_structure() {
        let a = generate(&[], Industry::Home, &mut StdRng::seed_from_u64(5));
        let b = generate(&["x".to_string()], Industry::Beauty, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
