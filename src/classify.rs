use crate::report::{Industry, WebsiteProfile};
use crate::tables::INDUSTRY_SYNONYMS;

/// Classify a website into an industry by synonym substring matching.
///
/// Categories are checked in fixed priority order (fashion, beauty,
/// electronics, fitness, home); the first one with any synonym present in
/// the lowercased title, description and keywords wins.
pub fn classify(profile: &WebsiteProfile) -> Industry {
    classify_text(&profile_text(profile))
}

fn profile_text(profile: &WebsiteProfile) -> String {
    format!(
        "{} {} {}",
        profile.title,
        profile.description,
        profile.keywords.join(" ")
    )
}

pub fn classify_text(text: &str) -> Industry {
    let text = text.to_lowercase();
    INDUSTRY_SYNONYMS
        .iter()
        .find(|(_, synonyms)| synonyms.iter().any(|s| text.contains(s)))
        .map(|(industry, _)| *industry)
        .unwrap_or(Industry::General)
}
