pub mod docs;
pub mod utility;

use tracing::debug;
use twilight_model::gateway::{GatewayReaction, payload::incoming::MessageCreate};

use docso_core::Context;
use docso_utils::COMMAND_PREFIX;

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    docs::lookup::META,
    docs::pages::META,
    utility::help::META,
    // Add new commands here
];

/// Split a prefixed message into a lowercased command name and its arguments.
///
/// Returns `None` for messages that are not commands.
pub fn parse_command(content: &str) -> Option<(String, Vec<&str>)> {
    let content = content.trim().strip_prefix(COMMAND_PREFIX)?;
    let mut tokens = content.split_whitespace();
    let cmd = tokens.next()?.to_ascii_lowercase();

    Some((cmd, tokens.collect()))
}

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content = msg.content.clone();
    let Some((cmd, args)) = parse_command(&content) else {
        return Ok(());
    };

    debug!(cmd, args = args.len(), author_id = msg.author.id.get(), "dispatching command");

    match cmd.as_str() {
        "lookup" | "docs" => docs::lookup::run(ctx, msg, &args).await?,
        "pages" => docs::pages::run(ctx, msg, &args).await?,
        "help" => utility::help::run(ctx, msg).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}

/// Route a reaction toggle (added or removed) on any message.
pub async fn handle_reaction(ctx: Context, reaction: &GatewayReaction) -> anyhow::Result<()> {
    docs::navigate::run(ctx, reaction).await
}
