use crate::feed::FeedSource;
use crate::storage::{SessionState, StateStore};
use crate::utils::Metrics;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::MissedTickBehavior;

/// Periodic bridge between the upstream feed and the prediction engine.
///
/// One tick: fetch the latest round, skip it if the session id did not
/// advance, otherwise fold it into the shared state and persist the
/// snapshot. Ticks run strictly one after another.
pub struct IngestLoop {
    feed: Arc<dyn FeedSource>,
    store: Arc<dyn StateStore>,
    state: Arc<RwLock<SessionState>>,
    metrics: Arc<Metrics>,
    poll_interval: Duration,
}

impl IngestLoop {
    pub fn new(
        feed: Arc<dyn FeedSource>,
        store: Arc<dyn StateStore>,
        state: Arc<RwLock<SessionState>>,
        metrics: Arc<Metrics>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            feed,
            store,
            state,
            metrics,
            poll_interval,
        }
    }

    /// Run forever. The first tick fires immediately, then every
    /// `poll_interval`; a slow tick delays the next one instead of
    /// stacking up.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.tick().await;
        }
    }

    /// Process one poll cycle. Any failure abandons the tick; the next
    /// one retries unconditionally.
    pub async fn tick(&self) {
        let round = match self.feed.fetch_latest().await {
            Ok(round) => round,
            Err(e) => {
                self.metrics.feed_errors.inc();
                tracing::warn!("Feed fetch failed: {}", e);
                return;
            }
        };

        // Dedup gate plus state update under one write lock, so the
        // responder only ever sees fully applied rounds.
        let snapshot = {
            let mut state = self.state.write().await;
            if state.is_duplicate(&round) {
                self.metrics.duplicate_ticks.inc();
                tracing::debug!(phien = round.phien, "Session unchanged, skipping tick");
                return;
            }
            state.apply_round(&round);
            state.clone()
        };

        self.metrics.rounds_ingested.inc();
        self.metrics.history_length.set(snapshot.chuoi_cau.len() as i64);
        self.metrics.current_session.set(snapshot.phien_hien_tai as i64);

        if let Err(e) = self.store.save(&snapshot).await {
            // In-memory state already advanced; keep serving it and retry
            // persistence on the next round.
            self.metrics.persist_errors.inc();
            tracing::error!(phien = snapshot.phien_hien_tai, "Failed to persist snapshot: {}", e);
            return;
        }

        tracing::info!(
            phien = snapshot.phien_hien_tai,
            ket_qua = %snapshot.ket_qua,
            du_doan = %snapshot.du_doan,
            do_tin_cay = %snapshot.do_tin_cay,
            "Round processed"
        );
    }
}
