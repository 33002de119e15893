use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Counter behaviour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CounterConfig {
    /// Count the store starts from (default: 0).
    #[serde(default)]
    pub initial: i64,
    /// Delay before a "+1 async" press lands, in milliseconds (default: 2000).
    #[serde(default = "default_async_delay_ms")]
    pub async_delay_ms: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture mouse clicks on buttons (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Log output. Logging stays off unless a file is set, since stdout belongs to the UI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_async_delay_ms() -> u64 {
    2000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial: 0,
            async_delay_ms: default_async_delay_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: default_log_filter(),
        }
    }
}

impl CounterConfig {
    pub fn async_delay(&self) -> Duration {
        Duration::from_millis(self.async_delay_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
