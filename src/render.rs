//! Terminal rendering of an analysis report

use std::fmt::Write;

use colored::Colorize;

use crate::report::{AnalysisReport, Priority};

/// Render a report as a multi-section terminal summary
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let site = &report.website;

    // Writing to a String cannot fail
    let _ = writeln!(out, "\n{} {}", "Growth report for".cyan().bold(), site.domain.bold());
    let _ = writeln!(out, "  Title:       {}", or_dash(&site.title));
    let _ = writeln!(out, "  Description: {}", or_dash(&site.description));
    let _ = writeln!(out, "  Industry:    {}", report.industry.to_string().green());
    let _ = writeln!(out, "  Source:      {}", site.method.to_string().dimmed());
    if !site.product_names.is_empty() {
        let _ = writeln!(out, "  Products:    {}", site.product_names.join(", "));
    }
    if !site.product_prices.is_empty() {
        let _ = writeln!(out, "  Prices:      {}", site.product_prices.join(", "));
    }

    let m = &report.current_metrics;
    let _ = writeln!(out, "\n{}", "Current metrics".bold());
    let _ = writeln!(out, "  ROAS {}%  CTR {}%  CPC ${}  CVR {}%", m.roas, m.ctr, m.cpc, m.cvr);

    if !report.competitors.is_empty() {
        let _ = writeln!(out, "\n{}", "Competitors".bold());
        for c in &report.competitors {
            let _ = writeln!(
                out,
                "  {:<14} revenue {:<14} ad spend {:<13} ROAS {}%  share {}%",
                c.name, c.estimated_revenue, c.ad_spend, c.roas, c.market_share
            );
        }
    }

    let market = &report.market;
    let _ = writeln!(out, "\n{}", "Market".bold());
    let _ = writeln!(
        out,
        "  Size {}  growth {}  trends: {}",
        market.total_market_size,
        market.growth_rate,
        market.top_trends.join(", ")
    );
    if let Some(peak) = market.seasonality.iter().max_by_key(|s| s.demand) {
        let _ = writeln!(out, "  Peak demand: {} ({})", peak.month, peak.demand);
    }
    for group in &market.demographics.age_groups {
        let _ = writeln!(
            out,
            "  {:<6} {:>3}% of buyers, engagement {}",
            group.age, group.percentage, group.engagement
        );
    }

    if !report.budget_optimization.is_empty() {
        let _ = writeln!(out, "\n{}", "Budget optimization".bold());
        for channel in &report.budget_optimization {
            let _ = writeln!(
                out,
                "  {:<11} {:>3}% -> {:>3}%  ROI {:.1}x",
                channel.name, channel.current, channel.optimized, channel.roi
            );
        }
    }

    let _ = writeln!(out, "\n{}", "Recommendations".bold());
    for rec in &report.recommendations {
        let priority = match rec.priority {
            Priority::High => rec.priority.to_string().red().bold(),
            Priority::Medium => rec.priority.to_string().yellow(),
        };
        let _ = writeln!(out, "  {} [{}] {}: {}", rec.icon, priority, rec.category, rec.action);
        let _ = writeln!(
            out,
            "      {} ({}% confidence) - {}",
            rec.impact.green(),
            rec.confidence,
            rec.reasoning.dimmed()
        );
    }

    out
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() {
        "-"
    } else {
        s
    }
}
