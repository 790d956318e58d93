//! The two extensions registered with the launcher: the query handler and the fallback handler.

use std::sync::Arc;

use reqwest::Client;
use tracing::info;

use crate::config::Settings;
use crate::item::{IconRef, Item};
use crate::session::{DEFAULT_MAX_OFFSET, Session};
use crate::wiki::{EndpointConfig, Resolver, WikipediaClient};
use crate::{DEFAULT_TRIGGER, PLUGIN_DESCRIPTION, PLUGIN_ID, PLUGIN_NAME};

/// Query handler answering `wiki <query>`.
#[derive(Debug, Clone)]
pub struct Plugin {
    client: WikipediaClient,
    endpoint: Arc<EndpointConfig>,
    max_offset: u32,
}

impl Plugin {
    /// Resolve the language endpoints once and build the plugin around them.
    pub async fn initialize(http: Client, settings: &Settings) -> Self {
        let endpoint = Resolver::new(http.clone())
            .resolve(settings.locale.as_deref())
            .await;
        info!(lang = %endpoint.language_code, "wikipedia plugin ready");
        Self::with_endpoint(http, endpoint).with_max_offset(settings.max_offset)
    }

    pub fn with_endpoint(http: Client, endpoint: EndpointConfig) -> Self {
        let endpoint = Arc::new(endpoint);
        Self {
            client: WikipediaClient::new(http, Arc::clone(&endpoint)),
            endpoint,
            max_offset: DEFAULT_MAX_OFFSET,
        }
    }

    pub fn with_max_offset(mut self, max_offset: u32) -> Self {
        self.max_offset = max_offset;
        self
    }

    pub fn id(&self) -> &'static str {
        PLUGIN_ID
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn description(&self) -> &'static str {
        PLUGIN_DESCRIPTION
    }

    pub fn default_trigger(&self) -> &'static str {
        DEFAULT_TRIGGER
    }

    pub fn icon(&self) -> IconRef {
        IconRef::plugin()
    }

    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// The query text if `input` starts with this plugin's trigger.
    pub fn match_trigger<'q>(&self, input: &'q str) -> Option<&'q str> {
        input.strip_prefix(DEFAULT_TRIGGER)
    }

    /// Start a fresh session for `query`. `is_valid` should turn false once the
    /// host has moved on to a different query.
    pub fn items<F>(&self, query: &str, is_valid: F) -> Session<'_, WikipediaClient, F>
    where
        F: Fn() -> bool,
    {
        Session::new(&self.client, query, is_valid).with_max_offset(self.max_offset)
    }

    pub fn fallback_handler(&self) -> FallbackHandler {
        FallbackHandler {
            endpoint: Arc::clone(&self.endpoint),
        }
    }
}

/// Offers a "search on Wikipedia" item when no other plugin matched.
#[derive(Debug, Clone)]
pub struct FallbackHandler {
    endpoint: Arc<EndpointConfig>,
}

impl FallbackHandler {
    pub fn id(&self) -> &'static str {
        "wikipedia.fallbacks"
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn description(&self) -> &'static str {
        PLUGIN_DESCRIPTION
    }

    pub fn fallbacks(&self, query: &str) -> Vec<Item> {
        vec![Item::fallback(query, &self.endpoint)]
    }
}
