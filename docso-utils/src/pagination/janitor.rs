//! Background eviction of idle pagination sessions.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use tokio::{
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};
use tracing::{debug, info};

use super::registry::{ExpiredSession, PaginationRegistry};
use super::{DEFAULT_IDLE_SECS, DEFAULT_SWEEP_SECS};

/// Transport hook that removes navigation controls from a message.
#[async_trait]
pub trait ControlSink: Send + Sync {
    async fn detach_controls(&self, channel_id: u64, message_id: u64) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct JanitorConfig {
    /// Sessions untouched for at least this long are evicted.
    pub idle_threshold: Duration,
    pub sweep_interval: Duration,
}

impl Default for JanitorConfig {
    fn default() -> Self {
        Self {
            idle_threshold: Duration::from_secs(DEFAULT_IDLE_SECS),
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_SECS),
        }
    }
}

/// Run [`sweep_once`] every `sweep_interval` until the task is aborted.
pub fn spawn_janitor(
    registry: PaginationRegistry,
    sink: Arc<dyn ControlSink>,
    config: JanitorConfig,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(config.sweep_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let now = tokio::time::Instant::now().into_std();
            sweep_once(&registry, &sink, now, config.idle_threshold).await;
        }
    })
}

/// Evict idle sessions and request control removal for each of them.
///
/// Detach requests are spawned and never awaited here; their failures are
/// only logged since the message may already be gone.
pub async fn sweep_once(
    registry: &PaginationRegistry,
    sink: &Arc<dyn ControlSink>,
    now: Instant,
    idle_threshold: Duration,
) -> Vec<ExpiredSession> {
    let expired = registry.sweep_idle(now, idle_threshold).await;

    if !expired.is_empty() {
        let remaining = registry.len().await;
        info!(
            evicted = expired.len(),
            remaining,
            "evicted idle pagination sessions"
        );
    }

    for session in &expired {
        let sink = Arc::clone(sink);
        let ExpiredSession {
            channel_id,
            message_id,
        } = *session;

        tokio::spawn(async move {
            if let Err(source) = sink.detach_controls(channel_id, message_id).await {
                debug!(?source, channel_id, message_id, "failed to detach controls");
            }
        });
    }

    expired
}
