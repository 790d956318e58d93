use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::types::{QueryResponse, SearchQuery};
use super::{EndpointConfig, WikiError};
use crate::item::Item;

/// One page of article search results.
/// Implemented by `WikipediaClient` for production; mock implementations used in tests.
pub trait ArticleSearch {
    async fn fetch(
        &self,
        query: &str,
        batch_size: u32,
        offset: u32,
    ) -> Result<Vec<Item>, WikiError>;

    fn endpoint(&self) -> &EndpointConfig;
}

#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: Client,
    endpoint: Arc<EndpointConfig>,
}

impl WikipediaClient {
    pub fn new(http: Client, endpoint: Arc<EndpointConfig>) -> Self {
        Self { http, endpoint }
    }
}

impl ArticleSearch for WikipediaClient {
    async fn fetch(
        &self,
        query: &str,
        batch_size: u32,
        offset: u32,
    ) -> Result<Vec<Item>, WikiError> {
        let limit = batch_size.to_string();
        let offset_param = offset.to_string();
        let url = Url::parse_with_params(
            &self.endpoint.search_base_url,
            [
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("list", "search"),
                ("srlimit", limit.as_str()),
                ("sroffset", offset_param.as_str()),
                ("srsearch", query),
            ],
        )?;

        let result: SearchQuery =
            get_query(&self.http, url, &self.endpoint.user_agent, None).await?;
        debug!(query, offset, hits = result.search.len(), "search batch fetched");

        Ok(result
            .search
            .iter()
            .map(|hit| Item::article(hit, &self.endpoint))
            .collect())
    }

    fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }
}

/// GET an `action=query` URL and return its `query` payload.
pub(crate) async fn get_query<T: DeserializeOwned>(
    http: &Client,
    url: Url,
    user_agent: &str,
    timeout: Option<Duration>,
) -> Result<T, WikiError> {
    let mut request = http.get(url).header("User-Agent", user_agent);
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!(status = %status, "Wikipedia API error");
        return Err(WikiError::Status(status.as_u16()));
    }

    let text = response.text().await?;
    let body: QueryResponse<T> = serde_json::from_str(&text)?;
    if let Some(err) = body.error {
        let err = WikiError::Api {
            code: err.code.unwrap_or_else(|| "unknown".to_string()),
            info: err.info.unwrap_or_else(|| "Unknown error".to_string()),
        };
        warn!(error = %err, "Wikipedia API error in 200 response");
        return Err(err);
    }
    body.query
        .ok_or_else(|| <serde_json::Error as serde::de::Error>::missing_field("query").into())
}
