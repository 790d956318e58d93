//! Wikipedia query plugin for desktop launchers.
//!
//! The host registers [`Plugin`] as a query source under its trigger and
//! [`FallbackHandler`] as a fallback source. Everything host-specific
//! (opening URLs, clipboard) goes through the [`Host`] trait.

pub mod config;
pub mod host;
pub mod item;
pub mod plugin;
pub mod session;
pub mod wiki;

pub use host::{Host, HostError, SystemHost};
pub use item::{Action, ActionEffect, IconRef, Item, ItemKind};
pub use plugin::{FallbackHandler, Plugin};
pub use session::Session;

pub const USER_AGENT: &str = concat!("wikiquery/", env!("CARGO_PKG_VERSION"), " (launcher plugin)");

pub const PLUGIN_ID: &str = "wikipedia";
pub const PLUGIN_NAME: &str = "Wikipedia";
pub const PLUGIN_DESCRIPTION: &str = "Search Wikipedia articles";
pub const DEFAULT_TRIGGER: &str = "wiki ";
