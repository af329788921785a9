use std::sync::Arc;

use tracing::{error, info};
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;

use rustls::crypto::ring::default_provider;

use docso_commands::{handle_message, handle_reaction};
use docso_core::{Config, Context};
use docso_docs::{DocumentCache, HttpFetcher};
use docso_utils::pagination::{
    PaginationEngine, PaginationRegistry, ReactionControls, spawn_janitor,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(config.discord_token.clone()));

    let fetcher = HttpFetcher::new(config.docs_mirror_url.clone(), config.fetch_timeout)?;
    let docs = Arc::new(DocumentCache::new(Arc::new(fetcher)));

    let registry = PaginationRegistry::new();
    let pages = PaginationEngine::new(registry.clone());
    let janitor = spawn_janitor(
        registry,
        Arc::new(ReactionControls::new(Arc::clone(&http))),
        config.janitor,
    );
    info!(
        idle_secs = config.janitor.idle_threshold.as_secs(),
        sweep_secs = config.janitor.sweep_interval.as_secs(),
        "pagination janitor started"
    );

    let ctx = Context::new(Arc::clone(&http), docs, pages);

    let intents = Intents::GUILD_MESSAGES
        | Intents::MESSAGE_CONTENT
        | Intents::GUILD_MESSAGE_REACTIONS
        | Intents::DIRECT_MESSAGES
        | Intents::DIRECT_MESSAGE_REACTIONS;

    // A shard is one Gateway WebSocket connection to Discord
    let mut shard = Shard::new(ShardId::new(0, 1), config.discord_token, intents);

    info!("docso is connecting...");

    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        match event {
            Event::Ready(_) => {
                info!("docso is ready");
            }

            // Commands may wait on a documentation fetch; keep the gateway moving.
            Event::MessageCreate(msg) => {
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    if let Err(source) = handle_message(ctx, msg).await {
                        error!(?source, "command handler failed");
                    }
                });
            }

            // Session state changes inline, in arrival order; the Discord edit is spawned.
            Event::ReactionAdd(reaction) => {
                if let Err(source) = handle_reaction(ctx.clone(), &reaction.0).await {
                    error!(?source, "reaction handler failed");
                }
            }
            Event::ReactionRemove(reaction) => {
                if let Err(source) = handle_reaction(ctx.clone(), &reaction.0).await {
                    error!(?source, "reaction handler failed");
                }
            }
            _ => {} // Ignore unused events
        }
    }

    janitor.abort();

    Ok(()) // Return Success, shutdown cleanly
}
