use tokio::task::JoinHandle;
use tracing::{debug, warn};
use twilight_model::{
    channel::message::EmojiReactionType,
    gateway::GatewayReaction,
    id::{
        Id,
        marker::{ChannelMarker, MessageMarker},
    },
};

use docso_core::Context;
use docso_utils::pagination::{
    NavAction, NavigationOutcome, remove_paginated_message, update_paginated_message,
};

/// Translate a reaction toggle into a navigation event and apply its result.
///
/// Transport failures are logged and swallowed; stale, foreign and no-op
/// navigation is silent.
pub async fn run(ctx: Context, reaction: &GatewayReaction) -> anyhow::Result<()> {
    let EmojiReactionType::Unicode { name } = &reaction.emoji else {
        return Ok(());
    };

    let Some(action) = NavAction::from_emoji(name) else {
        return Ok(());
    };

    navigate(
        &ctx,
        reaction.channel_id,
        reaction.message_id,
        reaction.user_id.get(),
        action,
    )
    .await;

    Ok(())
}

/// Apply `action` to the session behind `message_id`.
///
/// The session changes before this returns, so events are applied in the
/// order they arrive. The resulting edit or delete runs on its own task and
/// its handle is returned; `None` means nothing had to be sent.
pub async fn navigate(
    ctx: &Context,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
    user_id: u64,
    action: NavAction,
) -> Option<JoinHandle<()>> {
    let outcome = ctx
        .pages
        .handle_navigation(message_id.get(), user_id, action)
        .await;

    let http = ctx.http.clone();

    match outcome {
        NavigationOutcome::Rendered(page) => Some(tokio::spawn(async move {
            if let Err(source) = update_paginated_message(&http, channel_id, message_id, &page).await
            {
                warn!(
                    ?source,
                    message_id = message_id.get(),
                    page = page.page,
                    "failed to edit paginated message"
                );
            }
        })),
        NavigationOutcome::Destroyed { channel_id: stored } => {
            let channel_id = Id::<ChannelMarker>::new_checked(stored).unwrap_or(channel_id);

            Some(tokio::spawn(async move {
                if let Err(source) = remove_paginated_message(&http, channel_id, message_id).await {
                    warn!(
                        ?source,
                        message_id = message_id.get(),
                        "failed to remove paginated message"
                    );
                }
            }))
        }
        ignored => {
            debug!(
                ?ignored,
                message_id = message_id.get(),
                user_id,
                ?action,
                "navigation ignored"
            );
            None
        }
    }
}
