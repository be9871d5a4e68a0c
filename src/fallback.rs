//! Domain intelligence - synthesize a website profile from the hostname alone
//!
//! Used when the page cannot be retrieved or yields nothing. Never fails.

use rand::Rng;
use tracing::debug;

use crate::report::{ProfileMethod, WebsiteProfile};
use crate::tables::{products_for, DOMAIN_KEYWORDS, GENERAL_DESCRIPTOR};

/// Leading label of a hostname, treated as the company name
pub fn company_name(host: &str) -> &str {
    host.split('.').next().unwrap_or(host)
}

/// First domain keyword (in table order) found in the host or company name
pub fn detect_descriptor(host: &str, company: &str) -> &'static str {
    DOMAIN_KEYWORDS
        .iter()
        .find(|(keyword, _)| host.contains(keyword) || company.contains(keyword))
        .map(|(_, descriptor)| *descriptor)
        .unwrap_or(GENERAL_DESCRIPTOR)
}

/// Uppercase the first character, leave the rest alone
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build a synthetic profile for `host`
pub fn generate<R: Rng + ?Sized>(host: &str, company: &str, rng: &mut R) -> WebsiteProfile {
    let descriptor = detect_descriptor(host, company);
    debug!(host, descriptor, "Synthesizing profile from domain");

    let product_names: Vec<String> = products_for(descriptor).iter().map(|s| s.to_string()).collect();
    let product_prices = product_names
        .iter()
        .map(|_| {
            let cents: u32 = rng.gen_range(2000..22000);
            format!("{}.{:02}", cents / 100, cents % 100)
        })
        .collect();

    WebsiteProfile {
        title: format!("{} - {}", capitalize(company), descriptor),
        description: format!("Premium {} products and services", descriptor),
        keywords: descriptor.split_whitespace().map(String::from).collect(),
        product_prices,
        product_names,
        domain: host.to_string(),
        method: ProfileMethod::IntelligentAnalysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_beautybox_profile() {
        let mut rng = StdRng::seed_from_u64(1);
        let profile = generate("beautybox.com", "beautybox", &mut rng);
        assert_eq!(profile.title, "Beautybox - beauty cosmetics");
        assert_eq!(profile.description, "Premium beauty cosmetics products and services");
        assert_eq!(profile.keywords, vec!["beauty", "cosmetics"]);
        assert_eq!(
            profile.product_names,
            vec!["Foundation", "Lipstick", "Skincare Set", "Eye Shadow"]
        );
        assert_eq!(profile.product_prices.len(), 4);
        for price in &profile.product_prices {
            let value: f64 = price.parse().unwrap();
            assert!((20.0..220.0).contains(&value), "price out of range: {}", price);
            assert_eq!(price.split('.').nth(1).map(str::len), Some(2));
        }
        assert_eq!(profile.method, ProfileMethod::IntelligentAnalysis);
        assert_eq!(profile.domain, "beautybox.com");
    }

    #[test]
    fn test_prices_stay_below_upper_bound() {
        for seed in 0..10_000 {
            let mut rng = StdRng::seed_from_u64(seed);
            for price in generate("shop.test", "shop", &mut rng).product_prices {
                let value: f64 = price.parse().unwrap();
                assert!((20.0..220.0).contains(&value), "seed {} gave {}", seed, price);
            }
        }
    }

    #[test]
    fn test_keyword_table_order() {
        // "store" precedes "beauty" in the table
        assert_eq!(detect_descriptor("beautystore.com", "beautystore"), "retail ecommerce");
        assert_eq!(detect_descriptor("myshopify.com", "myshopify"), "ecommerce platform");
        assert_eq!(detect_descriptor("fittech.io", "fittech"), "technology electronics");
    }

    #[test]
    fn test_unmatched_domain_is_general() {
        let mut rng = StdRng::seed_from_u64(2);
        let profile = generate("notarealsite.invalid", "notarealsite", &mut rng);
        assert_eq!(profile.title, "Notarealsite - general");
        assert_eq!(profile.product_names.len(), 4);
        assert_eq!(profile.product_names[0], "Product 1");
        assert_eq!(profile.keywords, vec!["general"]);
    }

    #[test]
    fn test_company_name_and_capitalize() {
        assert_eq!(company_name("www.example.com"), "www");
        assert_eq!(company_name("localhost"), "localhost");
        assert_eq!(capitalize("zara"), "Zara");
        assert_eq!(capitalize(""), "");
    }
}
