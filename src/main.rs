use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use futures::StreamExt;
use reqwest::Client;
use tracing::{debug, info, warn};

use wikiquery::config::{CONNECT_TIMEOUT, Settings};
use wikiquery::{Action, Item, ItemKind, Plugin, SystemHost};

/// Search Wikipedia from the terminal, the way the launcher plugin does.
#[derive(Parser)]
#[command(name = "wikiquery", version, about)]
struct Cli {
    /// Query text; a leading `wiki ` trigger is accepted and stripped
    query: Vec<String>,

    /// Locale or language code to use instead of the system locale (e.g. "de")
    #[arg(long)]
    lang: Option<String>,

    /// Number of result batches to pull before stopping
    #[arg(long, default_value_t = 1)]
    batches: usize,

    /// Open result N (1-based) in the browser
    #[arg(long, value_name = "N", conflicts_with = "copy")]
    open: Option<usize>,

    /// Copy the URL of result N (1-based) to the clipboard
    #[arg(long, value_name = "N")]
    copy: Option<usize>,

    /// Only print the fallback item for the query
    #[arg(long)]
    fallback: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wikiquery=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::from_env()?;
    if let Some(lang) = cli.lang.clone() {
        settings.locale = Some(lang);
    }

    let http = Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?;
    let plugin = Plugin::initialize(http, &settings).await;

    let raw = cli.query.join(" ");
    let query = plugin.match_trigger(&raw).unwrap_or(&raw);

    let items = if cli.fallback {
        let items = plugin.fallback_handler().fallbacks(query);
        print_batch(&items, 0);
        items
    } else {
        collect_batches(&plugin, query, cli.batches).await?
    };

    if let Some(n) = cli.open {
        activate(&items, n, "open")?;
    } else if let Some(n) = cli.copy {
        activate(&items, n, "copy")?;
    }
    Ok(())
}

async fn collect_batches(
    plugin: &Plugin,
    query: &str,
    max_batches: usize,
) -> Result<Vec<Item>, Box<dyn std::error::Error>> {
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancelled);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            flag.store(true, Ordering::SeqCst);
        }
    });

    let session = plugin.items(query, move || !cancelled.load(Ordering::SeqCst));
    let mut batches = std::pin::pin!(session.into_stream().take(max_batches));

    let mut items = Vec::new();
    while let Some(batch) = batches.next().await {
        let batch = batch.inspect_err(|e| warn!(error = %e, "search failed"))?;
        print_batch(&batch, items.len());
        items.extend(batch);
    }
    debug!(results = items.len(), "session finished");
    Ok(items)
}

fn print_batch(batch: &[Item], start: usize) {
    for (i, item) in batch.iter().enumerate() {
        let marker = match item.kind {
            ItemKind::Article => format!("{:>3}.", start + i + 1),
            ItemKind::Placeholder => "  -".to_string(),
            ItemKind::Fallback => "  ?".to_string(),
        };
        println!("{marker} {}", item.text);
        println!("     {}", item.subtext);
        for action in &item.actions {
            println!("     [{}] {}: {}", action.id, action.label, action.url());
        }
    }
}

/// Run the action `wanted` of item `n`, or the item's first action when it has no such action.
fn activate(items: &[Item], n: usize, wanted: &str) -> Result<(), Box<dyn std::error::Error>> {
    let item = n
        .checked_sub(1)
        .and_then(|i| items.get(i))
        .ok_or_else(|| format!("no result #{n} (got {})", items.len()))?;
    let action: &Action = item
        .actions
        .iter()
        .find(|a| a.id == wanted)
        .or_else(|| item.actions.first())
        .ok_or_else(|| format!("result #{n} has no actions"))?;

    info!(action = action.id, url = action.url(), "activating");
    action.activate(&SystemHost)?;
    Ok(())
}
