//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::{format::parse_duration, timer::TimerConfig};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "interval-timer")]
#[command(about = "A work/rest interval timer controlled over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Work duration per set, as seconds ("45", "7.5") or minutes:seconds ("1:30")
    #[arg(short, long, default_value = "5", value_parser = parse_duration_arg)]
    pub work: u32,

    /// Rest duration per set, same format as --work
    #[arg(short, long, default_value = "2", value_parser = parse_duration_arg)]
    pub rest: u32,

    /// Number of work/rest sets
    #[arg(short, long, default_value = "5")]
    pub sets: u32,

    /// Tick period in milliseconds
    #[arg(long, default_value = "100")]
    pub tick_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Initial timer configuration, durations in tenths of a second
    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig::new(self.work, self.rest, self.sets)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

/// Durations use the same lenient parser as typed-in values
fn parse_duration_arg(value: &str) -> Result<u32, String> {
    Ok(parse_duration(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_timer_defaults() {
        let config = Config::try_parse_from(["interval-timer"]).unwrap();
        assert_eq!(config.timer_config(), TimerConfig::default());
        assert_eq!(config.tick_period(), Duration::from_millis(100));
        assert_eq!(config.address(), "0.0.0.0:20554");
    }

    #[test]
    fn test_durations_accept_minutes() {
        let config =
            Config::try_parse_from(["interval-timer", "-w", "1:30", "-r", "15", "-s", "8"]).unwrap();
        assert_eq!(config.timer_config(), TimerConfig::new(900, 150, 8));
    }
}
