use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub assist: AssistConfig,
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone)]
pub struct AssistConfig {
    /// Artificial latency before a canned answer is revealed.
    pub answer_delay_ms: u64,
}

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub tick_ms: u64,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            assist: AssistConfig {
                answer_delay_ms: env_u64("ASSIST_ANSWER_DELAY_MS", 1500)?,
            },
            console: ConsoleConfig {
                tick_ms: env_u64("CONSOLE_TICK_MS", 50)?,
                log_filter: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assist: AssistConfig {
                answer_delay_ms: 1500,
            },
            console: ConsoleConfig {
                tick_ms: 50,
                log_filter: "info".to_string(),
            },
        }
    }
}

fn env_u64(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(ConfigError::InvalidValue { key, value: raw }),
        },
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_env_unset() {
        let config = AppConfig::default();
        assert_eq!(config.assist.answer_delay_ms, 1500);
        assert_eq!(config.console.tick_ms, 50);
    }

    #[test]
    fn rejects_unparsable_values() {
        std::env::set_var("ASSIST_ANSWER_DELAY_MS", "soon");
        let result = AppConfig::from_env();
        std::env::remove_var("ASSIST_ANSWER_DELAY_MS");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "ASSIST_ANSWER_DELAY_MS", .. })
        ));
    }
}
