use prometheus::{IntCounter, IntGauge, Registry, TextEncoder};

/// Prometheus metrics for the ingest loop and feed health.
pub struct Metrics {
    pub registry: Registry,
    pub rounds_ingested: IntCounter,
    pub duplicate_ticks: IntCounter,
    pub feed_errors: IntCounter,
    pub persist_errors: IntCounter,
    pub history_length: IntGauge,
    pub current_session: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let rounds_ingested = IntCounter::new("rounds_ingested_total", "Rounds processed")
            .expect("Failed to create rounds_ingested metric");

        let duplicate_ticks = IntCounter::new(
            "duplicate_ticks_total",
            "Ticks skipped because the session id did not advance",
        )
        .expect("Failed to create duplicate_ticks metric");

        let feed_errors = IntCounter::new("feed_errors_total", "Failed upstream fetches")
            .expect("Failed to create feed_errors metric");

        let persist_errors = IntCounter::new("persist_errors_total", "Failed snapshot writes")
            .expect("Failed to create persist_errors metric");

        let history_length = IntGauge::new("history_length", "Current outcome history length")
            .expect("Failed to create history_length metric");

        let current_session = IntGauge::new("current_session", "Latest processed session id")
            .expect("Failed to create current_session metric");

        registry.register(Box::new(rounds_ingested.clone())).ok();
        registry.register(Box::new(duplicate_ticks.clone())).ok();
        registry.register(Box::new(feed_errors.clone())).ok();
        registry.register(Box::new(persist_errors.clone())).ok();
        registry.register(Box::new(history_length.clone())).ok();
        registry.register(Box::new(current_session.clone())).ok();

        Self {
            registry,
            rounds_ingested,
            duplicate_ticks,
            feed_errors,
            persist_errors,
            history_length,
            current_session,
        }
    }

    /// Render the registry in the text exposition format.
    pub fn export(&self) -> String {
        let encoder = TextEncoder::new();
        encoder
            .encode_to_string(&self.registry.gather())
            .unwrap_or_default()
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
