//! Server configuration.

use std::time::Duration;

use thiserror::Error;

/// Default address to bind to
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port to bind to
pub const DEFAULT_PORT: u16 = 5000;

/// Default time between two inactivity sweeps
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(15);

/// Default silence after which a participant is swept
pub const DEFAULT_INACTIVITY_THRESHOLD: Duration = Duration::from_secs(10);

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Sweep interval must be non-zero
    #[error("Sweep interval must be greater than zero")]
    ZeroSweepInterval,

    /// Inactivity threshold must be non-zero
    #[error("Inactivity threshold must be greater than zero")]
    ZeroInactivityThreshold,
}

/// Runtime configuration of the chat server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port number to bind to
    pub port: u16,
    /// Time between two inactivity sweeps
    pub sweep_interval: Duration,
    /// Silence after which a participant is swept.
    ///
    /// Kept below `sweep_interval`, so a participant may stay up to one
    /// interval past the threshold before being swept.
    pub inactivity_threshold: Duration,
    /// Reject messages whose sender is not a registered participant
    pub require_registered_sender: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            inactivity_threshold: DEFAULT_INACTIVITY_THRESHOLD,
            require_registered_sender: false,
        }
    }
}

impl ServerConfig {
    /// Check the configuration before starting the server
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a duration is zero.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.sweep_interval.is_zero() {
            return Err(ConfigError::ZeroSweepInterval);
        }
        if self.inactivity_threshold.is_zero() {
            return Err(ConfigError::ZeroInactivityThreshold);
        }
        Ok(self)
    }

    /// `host:port` string to bind to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // テスト項目: デフォルト設定が正しく設定される
        // when (操作):
        let config = ServerConfig::default();

        // then (期待する結果):
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert_eq!(config.sweep_interval, Duration::from_secs(15));
        assert_eq!(config.inactivity_threshold, Duration::from_secs(10));
        assert!(!config.require_registered_sender);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_durations_are_rejected() {
        // テスト項目: 0 の周期・しきい値は設定エラーになる
        // given (前提条件):
        let zero_interval = ServerConfig {
            sweep_interval: Duration::ZERO,
            ..ServerConfig::default()
        };
        let zero_threshold = ServerConfig {
            inactivity_threshold: Duration::ZERO,
            ..ServerConfig::default()
        };

        // then (期待する結果):
        assert_eq!(
            zero_interval.validate(),
            Err(ConfigError::ZeroSweepInterval)
        );
        assert_eq!(
            zero_threshold.validate(),
            Err(ConfigError::ZeroInactivityThreshold)
        );
    }
}
