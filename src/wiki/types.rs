use serde::Deserialize;

/// Top-level envelope shared by every `action=query` response.
///
/// MediaWiki reports failures as `{"error": {...}}` with HTTP 200, so `query`
/// stays optional here and callers check `error` first.
#[derive(Debug, Deserialize)]
pub struct QueryResponse<T> {
    pub query: Option<T>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: Option<String>,
    pub info: Option<String>,
}

/// `list=search` payload.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Vec<SearchMatch>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchMatch {
    pub title: String,
    #[serde(default)]
    pub snippet: String,
}

/// `meta=siteinfo&siprop=languages` payload.
#[derive(Debug, Deserialize)]
pub struct SiteInfoQuery {
    pub languages: Vec<SiteLanguage>,
}

#[derive(Debug, Deserialize)]
pub struct SiteLanguage {
    pub code: String,
}
