use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Characters left untouched when encoding an article title into a URL path.
/// Unreserved characters plus `/`, which subpage titles use as a separator.
const TITLE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Where to send API calls and how to build the URLs handed to the host.
///
/// Produced once by [`Resolver`](super::Resolver) and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub search_base_url: String,
    pub article_base_url: String,
    /// `{lang}` and `{query}` are substituted verbatim.
    pub site_search_url_template: String,
    pub user_agent: String,
    pub language_code: String,
}

impl EndpointConfig {
    /// Configuration for the Wikipedia served under `<lang>.wikipedia.org`.
    pub fn wikipedia(language_code: &str) -> Self {
        Self {
            search_base_url: format!("https://{language_code}.wikipedia.org/w/api.php"),
            article_base_url: format!("https://{language_code}.wikipedia.org/wiki/"),
            site_search_url_template: "https://{lang}.wikipedia.org/wiki/Special:Search/{query}"
                .to_string(),
            user_agent: crate::USER_AGENT.to_string(),
            language_code: language_code.to_string(),
        }
    }

    pub fn article_url(&self, title: &str) -> String {
        format!("{}{}", self.article_base_url, encode_title(title))
    }

    pub fn site_search_url(&self, query: &str) -> String {
        self.site_search_url_template
            .replace("{lang}", &self.language_code)
            .replace("{query}", query)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::wikipedia(DEFAULT_LANGUAGE)
    }
}

/// Spaces become underscores, then everything outside the unreserved set is percent-encoded.
pub fn encode_title(title: &str) -> String {
    utf8_percent_encode(&title.replace(' ', "_"), TITLE_ENCODE_SET).to_string()
}
