use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};
use url::Url;

use crate::error::{Result, StorelensError};
use crate::fetch::{RetrievalFailure, Retriever};
use crate::report::{ProfileMethod, WebsiteProfile};

/// Elements whose class or attributes suggest a price
const PRICE_SELECTOR: &str = r#"[class*="price"], [data-price], .price, .cost, [class*="amount"]"#;

/// Headings and elements flagged as product/title/name
const NAME_SELECTOR: &str = r#"h1, h2, [class*="product"], [class*="title"], [class*="name"]"#;

const MAX_PRICES: usize = 10;
const MAX_NAMES: usize = 5;
const MIN_NAME_CHARS: usize = 4;
const MAX_NAME_CHARS: usize = 99;

/// Digits with optional thousands groups and an optional fractional part
static PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+(?:,\d+)*(?:\.\d+)?").expect("Invalid price regex")
});

/// Retrieve a page and extract a website profile from it.
///
/// Retrieval and parse failures are logged and swallowed; the caller gets
/// `None` and is expected to fall back to synthesized data. A page that
/// yields no usable field at all is treated the same way.
pub fn extract_website(retriever: &dyn Retriever, url: &Url) -> Option<WebsiteProfile> {
    let html = match retriever.retrieve(url.as_str()) {
        Ok(html) => html,
        Err(e) => {
            info!(url = %url, "Direct retrieval failed, using domain intelligence");
            debug!(failure = ?RetrievalFailure::classify(&e), error = %e, "Retrieval error detail");
            return None;
        }
    };

    match extract_profile(&html, url) {
        Ok(profile) if profile_is_empty(&profile) => {
            info!(url = %url, "Page yielded no usable content");
            None
        }
        Ok(profile) => Some(profile),
        Err(e) => {
            debug!(error = %e, "Parse error, discarding page");
            None
        }
    }
}

/// Extract title, description, keywords, prices and product names from HTML
pub fn extract_profile(html: &str, url: &Url) -> Result<WebsiteProfile> {
    let domain = url
        .host_str()
        .ok_or_else(|| StorelensError::ExtractionError(format!("URL has no host: {}", url)))?
        .to_string();

    let document = Html::parse_document(html);

    Ok(WebsiteProfile {
        title: extract_title(&document)?,
        description: extract_description(&document)?,
        keywords: extract_keywords(&document)?,
        product_prices: extract_prices(&document)?,
        product_names: extract_product_names(&document)?,
        domain,
        method: ProfileMethod::Direct,
    })
}

fn selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| StorelensError::ExtractionError(format!("Invalid selector: {:?}", e)))
}

/// textContent-style concatenation of all descendant text
fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

fn first_meta_content(document: &Html, css: &str) -> Result<Option<String>> {
    let sel = selector(css)?;
    Ok(document
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(String::from))
}

fn extract_title(document: &Html) -> Result<String> {
    let sel = selector("title")?;
    Ok(document
        .select(&sel)
        .next()
        .map(|el| text_of(el).trim().to_string())
        .unwrap_or_default())
}

fn extract_description(document: &Html) -> Result<String> {
    if let Some(desc) = first_meta_content(document, r#"meta[name="description"]"#)? {
        if !desc.is_empty() {
            return Ok(desc);
        }
    }
    Ok(first_meta_content(document, r#"meta[property="og:description"]"#)?.unwrap_or_default())
}

fn extract_keywords(document: &Html) -> Result<Vec<String>> {
    let keywords = first_meta_content(document, r#"meta[name="keywords"]"#)?.unwrap_or_default();
    Ok(keywords
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect())
}

fn extract_prices(document: &Html) -> Result<Vec<String>> {
    let sel = selector(PRICE_SELECTOR)?;
    Ok(document
        .select(&sel)
        .filter_map(|el| PRICE_RE.find(&text_of(el)).map(|m| m.as_str().to_string()))
        .take(MAX_PRICES)
        .collect())
}

fn extract_product_names(document: &Html) -> Result<Vec<String>> {
    let sel = selector(NAME_SELECTOR)?;
    Ok(document
        .select(&sel)
        .map(|el| text_of(el).trim().to_string())
        .filter(|text| (MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&text.chars().count()))
        .take(MAX_NAMES)
        .collect())
}

fn profile_is_empty(profile: &WebsiteProfile) -> bool {
    profile.title.is_empty()
        && profile.description.is_empty()
        && profile.keywords.is_empty()
        && profile.product_prices.is_empty()
        && profile.product_names.is_empty()
}
