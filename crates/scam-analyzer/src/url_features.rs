use scam_protocol::{UrlFeatures, UrlStructure};
use url::Url;

const SUSPICIOUS_TLDS: [&str; 11] = [
    "xyz", "top", "click", "link", "tk", "ml", "ga", "cf", "gq", "buzz", "work",
];

const TRUSTED_DOMAINS: [&str; 6] = [
    "google.com",
    "microsoft.com",
    "apple.com",
    "amazon.com",
    "paypal.com",
    "facebook.com",
];

/// Derives structural hints from an absolute URL. Never touches the network.
///
/// Unparsable input yields [`UrlFeatures::invalid`] instead of an error, the
/// features only augment the request.
pub fn extract_url_features(raw: &str) -> UrlFeatures {
    let parsed = match Url::parse(raw.trim()) {
        Ok(parsed) => parsed,
        Err(_) => return UrlFeatures::invalid(),
    };
    let domain = parsed.host_str().unwrap_or_default().to_string();
    let tld = domain.rsplit('.').next().unwrap_or_default().to_string();

    UrlFeatures::Parsed(UrlStructure {
        has_https: parsed.scheme() == "https",
        has_subdomain: domain.split('.').count() > 2,
        path_length: parsed.path().len(),
        has_query_params: parsed.query().is_some_and(|query| !query.is_empty()),
        suspicious_tld: is_suspicious_tld(&tld),
        is_trusted_domain: is_trusted_domain(&domain),
        domain_length: domain.len(),
        has_numbers: domain.chars().any(|ch| ch.is_ascii_digit()),
        has_hyphens: domain.contains('-'),
        domain,
        tld,
    })
}

fn is_suspicious_tld(tld: &str) -> bool {
    let lowered = tld.to_ascii_lowercase();
    SUSPICIOUS_TLDS.contains(&lowered.as_str())
}

// Suffix match on a label boundary: sub.google.com matches, evil-google.com does not.
fn is_trusted_domain(domain: &str) -> bool {
    let domain = domain.to_ascii_lowercase();
    TRUSTED_DOMAINS.iter().any(|trusted| {
        domain == *trusted
            || domain
                .strip_suffix(trusted)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}
