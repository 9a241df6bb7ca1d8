use serde::Deserialize;

/// Process configuration, all from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub feed_url: String,
    pub state_file: String,
    pub poll_interval_secs: u64,
    pub fetch_timeout_secs: u64,
}

impl Config {
    /// Load config from environment variables (.env respected).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a number"),
            feed_url: std::env::var("FEED_URL")
                .unwrap_or_else(|_| "https://sunwinsaygex-pcl2.onrender.com/api/sun".to_string()),
            state_file: std::env::var("STATE_FILE")
                .unwrap_or_else(|_| "./state.json".to_string()),
            poll_interval_secs: std::env::var("POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("POLL_INTERVAL_SECS must be a number"),
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("FETCH_TIMEOUT_SECS must be a number"),
        }
    }
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            feed_url: "http://localhost:9/api/sun".to_string(),
            state_file: "./state.json".to_string(),
            poll_interval_secs: 5,
            fetch_timeout_secs: 10,
        }
    }
}
