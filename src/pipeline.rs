//! Analysis pipeline - orchestrates extraction, classification, enrichment
//! and aggregation into one `AnalysisReport`.
//!
//! Callers see exactly two failure shapes: a validation error (nothing ran)
//! or a degraded outcome carrying the static fallback report. Retrieval
//! problems never surface; they route to domain intelligence instead.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};
use url::Url;

use crate::classify::classify;
use crate::competitors;
use crate::config::Config;
use crate::error::{Result, StorelensError};
use crate::extract::extract_website;
use crate::fallback;
use crate::fetch::{HttpRetriever, OfflineRetriever, Retriever};
use crate::market;
use crate::recommend;
use crate::report::{
    AnalysisReport, BudgetChannel, CompetitorRecord, CurrentMetrics, Demographics, Industry,
    MarketReport, Priority, ProfileMethod, Recommendation, WebsiteProfile,
};
use crate::tables::{baseline_for, BUDGET_CHANNELS};

/// Warning attached to every degraded outcome
pub const DEGRADED_WARNING: &str =
    "Analysis completed with limited data. Some features may use estimated values.";

const EMPTY_URL_MESSAGE: &str = "Please enter a valid website URL";
const INVALID_URL_MESSAGE: &str = "Please enter a valid URL (e.g., https://example.com)";

/// Orchestrator state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Validating,
    Extracting,
    Classifying,
    Enriching,
    Aggregating,
    Complete,
    Error,
}

/// Human-readable progress phases shown while an analysis runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Connecting,
    AnalyzingStructure,
    GatheringIntelligence,
    IdentifyingCategory,
    ResearchingCompetitors,
    GatheringMarket,
    GeneratingRecommendations,
    Finalizing,
    Complete,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Connecting => "Connecting to website...",
            Stage::AnalyzingStructure => "Analyzing website structure...",
            Stage::GatheringIntelligence => "Gathering website intelligence...",
            Stage::IdentifyingCategory => "Identifying business category...",
            Stage::ResearchingCompetitors => "Researching competitors...",
            Stage::GatheringMarket => "Gathering market intelligence...",
            Stage::GeneratingRecommendations => "Generating AI recommendations...",
            Stage::Finalizing => "Finalizing insights...",
            Stage::Complete => "Analysis complete!",
        }
    }
}

/// Emitted to the observer on every state or stage change.
/// `stage` is `None` when no status should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageEvent {
    pub state: PipelineState,
    pub stage: Option<Stage>,
}

impl StageEvent {
    pub fn label(&self) -> Option<&'static str> {
        self.stage.map(|s| s.label())
    }
}

/// Result of an analysis that got past validation
#[derive(Debug, Clone)]
pub enum Outcome {
    Complete(AnalysisReport),
    /// A stage faulted; `report` is the static fallback report
    Degraded { warning: String, report: AnalysisReport },
}

impl Outcome {
    pub fn report(&self) -> &AnalysisReport {
        match self {
            Outcome::Complete(report) => report,
            Outcome::Degraded { report, .. } => report,
        }
    }

    pub fn into_report(self) -> AnalysisReport {
        match self {
            Outcome::Complete(report) => report,
            Outcome::Degraded { report, .. } => report,
        }
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            Outcome::Complete(_) => None,
            Outcome::Degraded { warning, .. } => Some(warning),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }
}

/// Check that the input is a non-empty, parseable URL
pub fn validate_url(input: &str) -> Result<Url> {
    let input = input.trim();
    if input.is_empty() {
        return Err(StorelensError::Validation(EMPTY_URL_MESSAGE.into()));
    }
    Url::parse(input).map_err(|_| StorelensError::Validation(INVALID_URL_MESSAGE.into()))
}

pub type Observer = Box<dyn Fn(&StageEvent) + Send + Sync>;

/// Runs analyses one at a time. A call made while another is in flight is
/// rejected with `StorelensError::AnalysisInProgress`.
pub struct Analyzer {
    retriever: Box<dyn Retriever + Send + Sync>,
    rng: Mutex<StdRng>,
    observer: Option<Observer>,
    in_flight: AtomicBool,
}

impl Analyzer {
    pub fn new<T>(retriever: T, rng: StdRng) -> Self
    where
        T: Retriever + Send + Sync + 'static,
    {
        Self {
            retriever: Box::new(retriever),
            rng: Mutex::new(rng),
            observer: None,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Build an analyzer from configuration. `offline` disables retrieval so
    /// every profile comes from domain intelligence.
    pub fn from_config(config: &Config, offline: bool) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        if offline {
            Self::new(OfflineRetriever, rng)
        } else {
            Self::new(HttpRetriever::new(&config.fetch), rng)
        }
    }

    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&StageEvent) + Send + Sync + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    fn emit(&self, state: PipelineState, stage: Option<Stage>) {
        if let Some(stage) = stage {
            info!(state = ?state, "{}", stage.label());
        }
        if let Some(observer) = &self.observer {
            observer(&StageEvent { state, stage });
        }
    }

    /// Analyze a website URL.
    ///
    /// Errors only on validation failure or when another analysis is running.
    /// Validation runs first, so a bad URL reports its validation error even
    /// while another analysis holds the slot. Any fault after validation
    /// yields `Outcome::Degraded`.
    pub fn analyze(&self, input: &str) -> Result<Outcome> {
        let url = match validate_url(input) {
            Ok(url) => url,
            Err(e) => {
                self.emit(PipelineState::Validating, None);
                self.emit(PipelineState::Idle, None);
                return Err(e);
            }
        };

        // A rejected call emits nothing, the running analysis owns the observer
        let _guard = InFlightGuard::acquire(&self.in_flight)?;
        self.emit(PipelineState::Validating, None);

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.run_stages(&url)));
        let fault = match result {
            Ok(Ok(report)) => {
                self.emit(PipelineState::Complete, Some(Stage::Complete));
                return Ok(Outcome::Complete(report));
            }
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_message(payload.as_ref()),
        };

        warn!(url = %url, fault = %fault, "Analysis failed, substituting fallback report");
        self.emit(PipelineState::Error, None);

        let domain = url.host_str().unwrap_or(input.trim());
        Ok(Outcome::Degraded {
            warning: DEGRADED_WARNING.to_string(),
            report: fallback_report(domain),
        })
    }

    fn run_stages(&self, url: &Url) -> Result<AnalysisReport> {
        let mut guard = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let rng = &mut *guard;

        self.emit(PipelineState::Extracting, Some(Stage::Connecting));
        self.emit(PipelineState::Extracting, Some(Stage::AnalyzingStructure));
        let website = match extract_website(self.retriever.as_ref(), url) {
            Some(profile) => profile,
            None => {
                self.emit(PipelineState::Extracting, Some(Stage::GatheringIntelligence));
                let host = url.host_str().ok_or_else(|| {
                    StorelensError::PipelineError(format!("URL has no host: {}", url))
                })?;
                fallback::generate(host, fallback::company_name(host), rng)
            }
        };

        self.emit(PipelineState::Classifying, Some(Stage::IdentifyingCategory));
        let industry = classify(&website);

        self.emit(PipelineState::Enriching, Some(Stage::ResearchingCompetitors));
        let competitors = competitors::enrich(&website.domain, industry, rng);
        self.emit(PipelineState::Enriching, Some(Stage::GatheringMarket));
        let market = market::generate(&website.keywords, industry, rng);

        self.emit(PipelineState::Aggregating, Some(Stage::GeneratingRecommendations));
        let recommendations = recommend::generate(&website, &competitors, &market, rng);
        self.emit(PipelineState::Aggregating, Some(Stage::Finalizing));

        Ok(AnalysisReport {
            website,
            industry,
            competitors,
            market,
            recommendations,
            budget_optimization: budget_optimization(),
            current_metrics: current_metrics(industry, rng),
            generated_at: Utc::now(),
        })
    }
}

/// Clears the in-flight flag on drop, including during unwinding
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| StorelensError::AnalysisInProgress)?;
        Ok(Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Route panic reports through tracing instead of the default stderr hook.
///
/// A caught fault then surfaces once, as the degraded warning.
pub fn quiet_panics() {
    panic::set_hook(Box::new(|info| debug!(%info, "Panic captured")));
}

fn budget_optimization() -> Vec<BudgetChannel> {
    BUDGET_CHANNELS
        .iter()
        .map(|(name, current, optimized, roi)| BudgetChannel {
            name: name.to_string(),
            current: *current,
            optimized: *optimized,
            roi: *roi,
        })
        .collect()
}

/// Industry baseline metrics with bounded random jitter
pub fn current_metrics<R: Rng + ?Sized>(industry: Industry, rng: &mut R) -> CurrentMetrics {
    let base = baseline_for(industry);
    CurrentMetrics {
        roas: (base.roas + rng.gen_range(-20.0..20.0)).floor() as i64,
        ctr: format!("{:.2}", base.ctr + rng.gen_range(-0.2..0.2)),
        cpc: format!("{:.2}", base.cpc + rng.gen_range(-0.1..0.1)),
        cvr: format!("{:.2}", base.cvr + rng.gen_range(-0.3..0.3)),
    }
}

/// Fully static report used in degraded mode
pub fn fallback_report(domain: &str) -> AnalysisReport {
    let competitor = |name: &str, revenue: &str, spend: &str, roas, share, channels: [&str; 2]| {
        CompetitorRecord {
            name: name.into(),
            domain: String::new(),
            estimated_revenue: revenue.into(),
            ad_spend: spend.into(),
            roas,
            market_share: share,
            top_keywords: Vec::new(),
            ad_channels: channels.iter().map(|c| c.to_string()).collect(),
        }
    };

    AnalysisReport {
        website: WebsiteProfile {
            title: format!("{} Analysis", domain),
            description: "Ecommerce website analysis".into(),
            keywords: Vec::new(),
            product_prices: Vec::new(),
            product_names: Vec::new(),
            domain: domain.to_string(),
            method: ProfileMethod::Fallback,
        },
        industry: Industry::General,
        competitors: vec![
            competitor("Competitor A", "$1.2M/month", "$85K/month", 285, 12, ["Google Ads", "Facebook Ads"]),
            competitor("Competitor B", "$2.1M/month", "$125K/month", 315, 18, ["Google Ads", "Instagram Ads"]),
        ],
        market: MarketReport {
            total_market_size: "$24.5B".into(),
            growth_rate: "12.3%".into(),
            top_trends: vec![
                "mobile commerce".into(),
                "social shopping".into(),
                "personalization".into(),
            ],
            seasonality: Vec::new(),
            demographics: Demographics::default(),
        },
        recommendations: vec![Recommendation {
            priority: Priority::High,
            category: "Quick Win".into(),
            action: "Optimize mobile experience for better conversions".into(),
            impact: "+35% mobile ROAS".into(),
            confidence: 85,
            icon: "🎯".into(),
            reasoning: "Mobile traffic share is high".into(),
        }],
        budget_optimization: Vec::new(),
        current_metrics: CurrentMetrics {
            roas: 240,
            ctr: "2.0".into(),
            cpc: "0.80".into(),
            cvr: "2.4".into(),
        },
        generated_at: Utc::now(),
    }
}

/// Tracks the status label for display. The "Analysis complete!" label
/// disappears once `clear_after` has elapsed.
pub struct StatusBoard {
    current: Mutex<Option<(Stage, Instant)>>,
    clear_after: Duration,
}

impl StatusBoard {
    pub fn new(clear_after: Duration) -> Self {
        Self {
            current: Mutex::new(None),
            clear_after,
        }
    }

    pub fn observe(&self, event: &StageEvent) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current = event.stage.map(|stage| (stage, Instant::now()));
    }

    pub fn current(&self) -> Option<&'static str> {
        let current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        match *current {
            Some((Stage::Complete, at)) if at.elapsed() >= self.clear_after => None,
            Some((stage, _)) => Some(stage.label()),
            None => None,
        }
    }
}
