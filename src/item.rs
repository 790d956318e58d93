//! Display items handed to the host, and the actions attached to them.

use std::path::PathBuf;

use crate::host::{Host, HostError};
use crate::wiki::EndpointConfig;
use crate::wiki::markup::strip_tags;
use crate::wiki::types::SearchMatch;
use crate::{PLUGIN_ID, PLUGIN_NAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A search hit linking to an article.
    Article,
    /// Shown for an empty query; carries no actions.
    Placeholder,
    /// Links out to the site's own search page.
    Fallback,
}

/// Deferred reference to an icon asset. Nothing is loaded until the host asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconRef {
    Plugin,
}

impl IconRef {
    pub fn plugin() -> Self {
        Self::Plugin
    }

    pub fn resolve(&self) -> PathBuf {
        match self {
            Self::Plugin => plugin_icon_path(),
        }
    }
}

fn plugin_icon_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/wikipedia.png"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEffect {
    OpenUrl(String),
    CopyToClipboard(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub id: &'static str,
    pub label: &'static str,
    pub effect: ActionEffect,
}

impl Action {
    pub fn open(url: String) -> Self {
        Self {
            id: "open",
            label: "Open article",
            effect: ActionEffect::OpenUrl(url),
        }
    }

    pub fn copy(url: String) -> Self {
        Self {
            id: "copy",
            label: "Copy URL",
            effect: ActionEffect::CopyToClipboard(url),
        }
    }

    pub fn site_search(url: String) -> Self {
        Self {
            id: "wiki_search",
            label: "Search on Wikipedia",
            effect: ActionEffect::OpenUrl(url),
        }
    }

    /// Target URL of the effect, whichever kind it is.
    pub fn url(&self) -> &str {
        match &self.effect {
            ActionEffect::OpenUrl(url) | ActionEffect::CopyToClipboard(url) => url,
        }
    }

    pub fn activate(&self, host: &impl Host) -> Result<(), HostError> {
        match &self.effect {
            ActionEffect::OpenUrl(url) => host.open_url(url),
            ActionEffect::CopyToClipboard(text) => host.set_clipboard_text(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub kind: ItemKind,
    pub text: String,
    pub subtext: String,
    pub icon: IconRef,
    pub actions: Vec<Action>,
}

impl Item {
    /// Map one search hit to an article item with `open` and `copy` actions.
    ///
    /// The subtext is the tag-free snippet, or the article URL when nothing is left of it.
    pub fn article(hit: &SearchMatch, endpoint: &EndpointConfig) -> Self {
        let url = endpoint.article_url(&hit.title);
        let snippet = strip_tags(&hit.snippet);
        let subtext = if snippet.is_empty() {
            url.clone()
        } else {
            snippet.into_owned()
        };
        Self {
            id: PLUGIN_ID.to_string(),
            kind: ItemKind::Article,
            text: hit.title.clone(),
            subtext,
            icon: IconRef::plugin(),
            actions: vec![Action::open(url.clone()), Action::copy(url)],
        }
    }

    pub fn placeholder() -> Self {
        Self {
            id: PLUGIN_ID.to_string(),
            kind: ItemKind::Placeholder,
            text: PLUGIN_NAME.to_string(),
            subtext: "Enter a query to search on Wikipedia".to_string(),
            icon: IconRef::plugin(),
            actions: Vec::new(),
        }
    }

    pub fn fallback(query: &str, endpoint: &EndpointConfig) -> Self {
        Self {
            id: PLUGIN_ID.to_string(),
            kind: ItemKind::Fallback,
            text: PLUGIN_NAME.to_string(),
            subtext: format!("Search '{query}' on Wikipedia"),
            icon: IconRef::plugin(),
            actions: vec![Action::site_search(endpoint.site_search_url(query))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHost {
        opened: Mutex<Vec<String>>,
        copied: Mutex<Vec<String>>,
    }

    impl Host for RecordingHost {
        fn open_url(&self, url: &str) -> Result<(), HostError> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }

        fn set_clipboard_text(&self, text: &str) -> Result<(), HostError> {
            self.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn hit(title: &str, snippet: &str) -> SearchMatch {
        SearchMatch {
            title: title.into(),
            snippet: snippet.into(),
        }
    }

    #[test]
    fn article_has_open_then_copy() {
        let item = Item::article(
            &hit("Albert Einstein", "<span>Albert</span> Einstein was"),
            &EndpointConfig::default(),
        );
        assert_eq!(item.kind, ItemKind::Article);
        assert_eq!(item.text, "Albert Einstein");
        assert_eq!(item.subtext, "Albert Einstein was");
        let ids: Vec<_> = item.actions.iter().map(|a| a.id).collect();
        assert_eq!(ids, ["open", "copy"]);
        for action in &item.actions {
            assert_eq!(action.url(), "https://en.wikipedia.org/wiki/Albert_Einstein");
        }
    }

    #[test]
    fn empty_snippet_falls_back_to_url() {
        let item = Item::article(&hit("Albert Einstein", "<b></b>"), &EndpointConfig::wikipedia("de"));
        assert_eq!(item.subtext, "https://de.wikipedia.org/wiki/Albert_Einstein");
    }

    #[test]
    fn all_items_share_the_plugin_id() {
        let cfg = EndpointConfig::default();
        assert_eq!(Item::article(&hit("A", "b"), &cfg).id, PLUGIN_ID);
        assert_eq!(Item::placeholder().id, PLUGIN_ID);
        assert_eq!(Item::fallback("q", &cfg).id, PLUGIN_ID);
    }

    #[test]
    fn placeholder_has_no_actions() {
        let item = Item::placeholder();
        assert_eq!(item.kind, ItemKind::Placeholder);
        assert!(item.actions.is_empty());
    }

    #[test]
    fn fallback_links_to_site_search() {
        let item = Item::fallback("quantum foam", &EndpointConfig::wikipedia("nl"));
        assert_eq!(item.kind, ItemKind::Fallback);
        assert_eq!(item.subtext, "Search 'quantum foam' on Wikipedia");
        assert_eq!(item.actions.len(), 1);
        assert_eq!(item.actions[0].id, "wiki_search");
        assert_eq!(
            item.actions[0].effect,
            ActionEffect::OpenUrl(
                "https://nl.wikipedia.org/wiki/Special:Search/quantum foam".into()
            )
        );
    }

    #[test]
    fn activate_routes_effects_to_host() {
        let host = RecordingHost::default();
        let item = Item::article(&hit("Rust", ""), &EndpointConfig::default());
        for action in &item.actions {
            action.activate(&host).unwrap();
        }
        assert_eq!(*host.opened.lock().unwrap(), ["https://en.wikipedia.org/wiki/Rust"]);
        assert_eq!(*host.copied.lock().unwrap(), ["https://en.wikipedia.org/wiki/Rust"]);
    }

    #[test]
    fn icon_resolves_to_bundled_asset() {
        let path = IconRef::plugin().resolve();
        assert!(path.ends_with("assets/wikipedia.png"));
        assert!(path.exists());
    }
}
