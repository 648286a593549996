use std::time::Duration;

/// Editor behavior settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// How long after a successful submission the summary redirect fires
    /// (default: 1000ms). Long enough for the success notice to register.
    pub redirect_delay: Duration,
}

impl EditorConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default |
    /// |------------------------------|---------|
    /// | `MERIDIAN_REDIRECT_DELAY_MS` | `1000`  |
    pub fn from_env() -> Self {
        let redirect_delay_ms: u64 = std::env::var("MERIDIAN_REDIRECT_DELAY_MS")
            .unwrap_or_else(|_| "1000".into())
            .parse()
            .expect("MERIDIAN_REDIRECT_DELAY_MS must be a valid u64");

        Self {
            redirect_delay: Duration::from_millis(redirect_delay_ms),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            redirect_delay: Duration::from_millis(1000),
        }
    }
}
