use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Upper bound on waiting for a contended flight or customer, in
    /// milliseconds. Fed into the booking engine at wiring time.
    #[serde(default = "default_lock_wait_ms")]
    pub lock_wait_ms: u64,

    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

fn default_lock_wait_ms() -> u64 {
    2_000
}

fn default_page_size() -> usize {
    50
}

impl BusinessRules {
    pub fn lock_wait(&self) -> Duration {
        Duration::from_millis(self.lock_wait_ms)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Layer the current environment file on top; optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Environment variables win, e.g. SKYFARE_BUSINESS_RULES__LOCK_WAIT_MS=500
            .add_source(config::Environment::with_prefix("SKYFARE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
