use serde::Serialize;

pub const INVALID_URL_FORMAT: &str = "Invalid URL format";

/// Structural hints derived from a URL without fetching it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UrlFeatures {
    Parsed(UrlStructure),
    Invalid { error: String },
}

impl UrlFeatures {
    pub fn invalid() -> Self {
        UrlFeatures::Invalid {
            error: INVALID_URL_FORMAT.to_string(),
        }
    }

    pub fn structure(&self) -> Option<&UrlStructure> {
        match self {
            UrlFeatures::Parsed(structure) => Some(structure),
            UrlFeatures::Invalid { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UrlStructure {
    pub domain: String,
    pub tld: String,
    pub has_https: bool,
    pub has_subdomain: bool,
    pub path_length: usize,
    pub has_query_params: bool,
    #[serde(rename = "suspiciousTLD")]
    pub suspicious_tld: bool,
    pub is_trusted_domain: bool,
    pub domain_length: usize,
    pub has_numbers: bool,
    pub has_hyphens: bool,
}
