use rand::Rng;
use tracing::debug;

use crate::report::{CompetitorRecord, MarketReport, Priority, Recommendation, WebsiteProfile};

const DEFAULT_SEGMENT: (&str, u32) = ("25-34", 92);
const DEFAULT_REGION: (&str, u32) = ("Asia Pacific", 25);

/// Generate the four templated recommendations.
///
/// Only the market demographics feed the templates (best-engaged age group,
/// fastest-growing region); everything else is fixed text with randomized
/// impact and confidence figures.
pub fn generate<R: Rng + ?Sized>(
    profile: &WebsiteProfile,
    competitors: &[CompetitorRecord],
    market: &MarketReport,
    rng: &mut R,
) -> Vec<Recommendation> {
    debug!(
        domain = %profile.domain,
        competitors = competitors.len(),
        "Generating recommendations"
    );

    let (segment, engagement) = market
        .demographics
        .age_groups
        .iter()
        .max_by_key(|g| g.engagement)
        .map(|g| (g.age.as_str(), g.engagement))
        .unwrap_or(DEFAULT_SEGMENT);

    let (region, growth) = market
        .demographics
        .geo_distribution
        .iter()
        .max_by_key(|r| r.growth)
        .map(|r| (r.region.as_str(), r.growth))
        .unwrap_or(DEFAULT_REGION);

    vec![
        Recommendation {
            priority: Priority::High,
            category: "Budget Allocation".into(),
            action: "Increase Google Ads spend by 25% based on competitor gap analysis".into(),
            impact: format!("+${}K monthly revenue", rng.gen_range(20..70)),
            confidence: rng.gen_range(85..100),
            icon: "💰".into(),
            reasoning: "Competitors are under-investing in search, creating opportunity".into(),
        },
        Recommendation {
            priority: Priority::High,
            category: "Audience Targeting".into(),
            action: format!("Target {} segment with {}% engagement rate", segment, engagement),
            impact: format!("+{}% ROAS improvement", rng.gen_range(30..70)),
            confidence: rng.gen_range(88..98),
            icon: "🎯".into(),
            reasoning: "Highest engagement demographic with growth potential".into(),
        },
        Recommendation {
            priority: Priority::Medium,
            category: "Geographic Expansion".into(),
            action: format!("Expand to {} market", region),
            impact: "+25% revenue growth".into(),
            confidence: rng.gen_range(75..90),
            icon: "🌍".into(),
            reasoning: format!("{}% growth rate in region", growth),
        },
        Recommendation {
            priority: Priority::Medium,
            category: "Creative Optimization".into(),
            action: "Implement video creative strategy based on top competitor analysis".into(),
            impact: format!("+{}% CTR improvement", rng.gen_range(15..40)),
            confidence: rng.gen_range(80..90),
            icon: "⚡".into(),
            reasoning: "Video content shows higher engagement in this vertical".into(),
        },
    ]
}
