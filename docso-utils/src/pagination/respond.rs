//! Discord delivery of paginated messages and their reaction controls.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use twilight_http::{Client, request::channel::reaction::RequestReactionType};
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker},
};

use super::controls::CONTROLS;
use super::engine::PaginationEngine;
use super::janitor::ControlSink;
use super::state::PaginationState;
use super::view::{RenderedPage, render_page};

/// Send the first page of a session, register it and attach its controls.
///
/// The session is registered before any control exists, so no reaction can
/// reach a message the engine does not know yet. If no control could be
/// attached the session is dropped again.
pub async fn send_paginated_message(
    http: &Client,
    engine: &PaginationEngine,
    channel_id: Id<ChannelMarker>,
    state: PaginationState,
) -> anyhow::Result<Id<MessageMarker>> {
    let embed = render_page(&state).to_embed()?;

    let created_message = http
        .create_message(channel_id)
        .embeds(&[embed])
        .await?
        .model()
        .await?;

    track_with_controls(
        http,
        engine,
        created_message.channel_id,
        created_message.id,
        state,
    )
    .await;

    Ok(created_message.id)
}

/// Register `state` under a sent message and attach its controls.
///
/// Returns whether the session is still tracked afterwards.
pub(crate) async fn track_with_controls(
    http: &Client,
    engine: &PaginationEngine,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
    state: PaginationState,
) -> bool {
    engine.register(message_id.get(), state).await;

    if attach_controls(http, channel_id, message_id).await > 0 {
        return true;
    }

    warn!(
        message_id = message_id.get(),
        "no pagination control attached; dropping session"
    );
    engine.registry().remove(message_id.get()).await;
    false
}

/// Replace a paginated message's content with a freshly rendered page.
pub async fn update_paginated_message(
    http: &Client,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
    page: &RenderedPage,
) -> anyhow::Result<()> {
    let embed = page.to_embed()?;

    http.update_message(channel_id, message_id)
        .embeds(Some(&[embed]))
        .await?;

    Ok(())
}

/// Delete a paginated message; its controls go with it.
pub async fn remove_paginated_message(
    http: &Client,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
) -> anyhow::Result<()> {
    http.delete_message(channel_id, message_id).await?;

    Ok(())
}

/// Add every navigation control, in order, logging failures.
///
/// Returns how many controls were attached.
pub async fn attach_controls(
    http: &Client,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
) -> usize {
    let mut attached = 0;

    for (_, emoji) in CONTROLS {
        let reaction = RequestReactionType::Unicode { name: emoji };

        if let Err(source) = http.create_reaction(channel_id, message_id, &reaction).await {
            warn!(
                ?source,
                channel_id = channel_id.get(),
                message_id = message_id.get(),
                emoji,
                "failed to attach pagination control"
            );
            continue;
        }

        attached += 1;
    }

    attached
}

/// [`ControlSink`] that clears all reactions through the Discord HTTP API.
#[derive(Clone)]
pub struct ReactionControls {
    http: Arc<Client>,
}

impl ReactionControls {
    pub fn new(http: Arc<Client>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ControlSink for ReactionControls {
    async fn detach_controls(&self, channel_id: u64, message_id: u64) -> anyhow::Result<()> {
        let (Some(channel_id), Some(message_id)) =
            (Id::new_checked(channel_id), Id::new_checked(message_id))
        else {
            anyhow::bail!("invalid message address {channel_id}/{message_id}");
        };

        self.http
            .delete_all_reactions(channel_id, message_id)
            .await?;

        Ok(())
    }
}
