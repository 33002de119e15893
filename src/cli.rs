use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::ui::counter::CounterIntent;

/// Terminal counter with increment, decrement, increment-if-odd and delayed increment.
#[derive(Debug, Parser)]
#[command(name = "clicker", version, about)]
pub struct Cli {
    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Starting count (overrides counter.initial)
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<i64>,

    /// Delay for "+1 async" in milliseconds (overrides counter.async_delay_ms)
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Print one line per render to stdout instead of starting the terminal UI
    #[arg(long)]
    pub headless: bool,

    /// Action tags to dispatch in headless mode, e.g. INCREMENT,DECREMENT
    #[arg(long, value_delimiter = ',', requires = "headless")]
    pub actions: Vec<String>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.counter.initial = seed;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.counter.async_delay_ms = delay_ms;
        }
    }

    pub fn intents(&self) -> Vec<CounterIntent> {
        self.actions
            .iter()
            .map(|tag| CounterIntent::parse(tag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::parse_from(["clicker", "--seed", "-3", "--delay-ms", "10"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.counter.initial, -3);
        assert_eq!(config.counter.async_delay_ms, 10);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["clicker"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
        assert!(!cli.headless);
    }

    #[test]
    fn actions_split_on_commas() {
        let cli = Cli::parse_from(["clicker", "--headless", "--actions", "increment,RESET"]);
        assert_eq!(
            cli.intents(),
            vec![
                CounterIntent::Increment,
                CounterIntent::Unrecognized("RESET".to_string())
            ]
        );
    }

    #[test]
    fn actions_require_headless() {
        assert!(Cli::try_parse_from(["clicker", "--actions", "increment"]).is_err());
    }
}
