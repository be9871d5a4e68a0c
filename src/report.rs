//! Report data model
//!
//! Every value here is built fresh for one analysis and never mutated afterwards.
//! Field names serialize as camelCase so the JSON output can feed a dashboard
//! view layer directly.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of business categories driving every downstream table lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Fashion,
    Beauty,
    Electronics,
    Fitness,
    Home,
    General,
}

impl Industry {
    pub const ALL: [Industry; 6] = [
        Industry::Fashion,
        Industry::Beauty,
        Industry::Electronics,
        Industry::Fitness,
        Industry::Home,
        Industry::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Industry::Fashion => "fashion",
            Industry::Beauty => "beauty",
            Industry::Electronics => "electronics",
            Industry::Fitness => "fitness",
            Industry::Home => "home",
            Industry::General => "general",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|i| i.label() == s)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a website profile came from. Display-only provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileMethod {
    /// Parsed from the live page
    Direct,
    /// Synthesized from the domain name
    IntelligentAnalysis,
    /// Static degraded-mode profile
    Fallback,
}

impl fmt::Display for ProfileMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProfileMethod::Direct => "direct",
            ProfileMethod::IntelligentAnalysis => "intelligent_analysis",
            ProfileMethod::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

/// Extracted or synthesized facts about the target site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteProfile {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    /// Raw numeric text, at most 10 entries
    pub product_prices: Vec<String>,
    /// At most 5 entries
    pub product_names: Vec<String>,
    /// Hostname of the analyzed URL
    pub domain: String,
    pub method: ProfileMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRecord {
    pub name: String,
    pub domain: String,
    pub estimated_revenue: String,
    pub ad_spend: String,
    pub roas: u32,
    pub market_share: u32,
    pub top_keywords: Vec<String>,
    pub ad_channels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalDemand {
    pub month: String,
    pub demand: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeGroup {
    pub age: String,
    pub percentage: u32,
    pub engagement: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionShare {
    pub region: String,
    pub share: u32,
    pub growth: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub age_groups: Vec<AgeGroup>,
    pub geo_distribution: Vec<RegionShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketReport {
    pub total_market_size: String,
    pub growth_rate: String,
    pub top_trends: Vec<String>,
    pub seasonality: Vec<SeasonalDemand>,
    pub demographics: Demographics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => f.write_str("High"),
            Priority::Medium => f.write_str("Medium"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub category: String,
    pub action: String,
    pub impact: String,
    pub confidence: u32,
    pub icon: String,
    pub reasoning: String,
}

/// One ad channel's share of spend, now and after optimization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetChannel {
    pub name: String,
    pub current: u32,
    pub optimized: u32,
    pub roi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentMetrics {
    pub roas: i64,
    pub ctr: String,
    pub cpc: String,
    pub cvr: String,
}

/// Aggregate root produced by one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub website: WebsiteProfile,
    pub industry: Industry,
    pub competitors: Vec<CompetitorRecord>,
    pub market: MarketReport,
    pub recommendations: Vec<Recommendation>,
    pub budget_optimization: Vec<BudgetChannel>,
    pub current_metrics: CurrentMetrics,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_industry_from_label() {
        assert_eq!(Industry::from_label("Fitness"), Some(Industry::Fitness));
        assert_eq!(Industry::from_label(" home "), Some(Industry::Home));
        assert_eq!(Industry::from_label("groceries"), None);
    }

    #[test]
    fn test_enum_serialization() {
        assert_eq!(serde_json::to_string(&Industry::Electronics).unwrap(), "\"electronics\"");
        assert_eq!(
            serde_json::to_string(&ProfileMethod::IntelligentAnalysis).unwrap(),
            "\"intelligent_analysis\""
        );
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"Medium\"");
    }

    #[test]
    fn test_profile_camel_case_fields() {
        let profile = WebsiteProfile {
            title: "Shop".into(),
            description: String::new(),
            keywords: vec![],
            product_prices: vec!["9.99".into()],
            product_names: vec![],
            domain: "shop.example".into(),
            method: ProfileMethod::Direct,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["productPrices"][0], "9.99");
        assert_eq!(json["method"], "direct");
        assert!(json.get("product_prices").is_none());
    }
}
