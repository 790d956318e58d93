use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use super::client::get_query;
use super::endpoint::DEFAULT_LANGUAGE;
use super::locale;
use super::types::SiteInfoQuery;
use super::{EndpointConfig, WikiError};

const SITEINFO_TIMEOUT: Duration = Duration::from_secs(5);

/// One-time negotiation of the Wikipedia language subdomain.
///
/// Asks the default API for the languages it knows and switches to the
/// locale's subdomain when it is among them. Never fails: any error keeps
/// the default `en` endpoints.
#[derive(Debug, Clone)]
pub struct Resolver {
    http: Client,
    siteinfo_url: String,
}

impl Resolver {
    pub fn new(http: Client) -> Self {
        Self {
            http,
            siteinfo_url: EndpointConfig::default().search_base_url,
        }
    }

    #[cfg(test)]
    fn with_siteinfo_url(http: Client, siteinfo_url: &str) -> Self {
        Self {
            http,
            siteinfo_url: siteinfo_url.to_string(),
        }
    }

    pub async fn resolve(&self, system_locale: Option<&str>) -> EndpointConfig {
        let Some(code) = system_locale.and_then(locale::language_code) else {
            warn!(locale = ?system_locale, "failed getting language code, using '{DEFAULT_LANGUAGE}'");
            return EndpointConfig::default();
        };
        if code == DEFAULT_LANGUAGE {
            return EndpointConfig::default();
        }

        match self.supported_languages().await {
            Ok(languages) if languages.iter().any(|l| *l == code) => {
                info!(lang = %code, "using localized Wikipedia");
                EndpointConfig::wikipedia(&code)
            }
            Ok(languages) => {
                debug!(lang = %code, known = languages.len(), "language not offered, using '{DEFAULT_LANGUAGE}'");
                EndpointConfig::default()
            }
            Err(WikiError::Network(e)) if e.is_timeout() => {
                warn!("error getting languages: request timed out, defaulting to '{DEFAULT_LANGUAGE}'");
                EndpointConfig::default()
            }
            Err(e) => {
                warn!(error = %e, "error getting languages, defaulting to '{DEFAULT_LANGUAGE}'");
                EndpointConfig::default()
            }
        }
    }

    async fn supported_languages(&self) -> Result<Vec<String>, WikiError> {
        let url = Url::parse_with_params(
            &self.siteinfo_url,
            [
                ("action", "query"),
                ("meta", "siteinfo"),
                ("utf8", "1"),
                ("siprop", "languages"),
                ("format", "json"),
            ],
        )?;
        let info: SiteInfoQuery =
            get_query(&self.http, url, crate::USER_AGENT, Some(SITEINFO_TIMEOUT)).await?;
        Ok(info.languages.into_iter().map(|l| l.code).collect())
    }
}
