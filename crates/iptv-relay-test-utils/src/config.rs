//! Configuration builders for tests.
//!
//! Use [`TestConfigBuilder`] to create customised [`ClientConfig`] values
//! without repeating boilerplate across crate boundaries, and
//! [`TestConfigFile`] when the code under test reads the config from disk.

use std::path::{Path, PathBuf};

use iptv_relay_config::{ClientConfig, DEFAULT_CONFIG_FILE};
use tempfile::TempDir;

/// Fluent builder for [`ClientConfig`] in tests.
///
/// # Example
///
/// ```ignore
/// let config = TestConfigBuilder::new()
///     .base_url(&backend.base_url())
///     .timeout_ms(250)
///     .build();
/// ```
pub struct TestConfigBuilder {
    config: ClientConfig,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config.server.base_url = url.to_string();
        self
    }

    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.server.timeout_ms = ms;
        self
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.config.logging.level = level.to_string();
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A config file in an owned temp directory.
///
/// The directory is deleted when this value is dropped, even on panic.
pub struct TestConfigFile {
    path: PathBuf,
    _temp_dir: TempDir,
}

impl TestConfigFile {
    /// Write `toml_content` to `iptv-relay.toml` in a fresh temp directory.
    pub async fn with_toml(toml_content: &str) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(&path, toml_content)
            .await
            .expect("failed to write test config");
        Self {
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Serialize `config` to a fresh temp file.
    pub async fn from_config(config: &ClientConfig) -> Self {
        let content = toml::to_string(config).expect("failed to serialize test config");
        Self::with_toml(&content).await
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = TestConfigBuilder::new()
            .base_url("http://127.0.0.1:9")
            .timeout_ms(250)
            .log_level("debug")
            .build();
        assert_eq!(config.server.base_url, "http://127.0.0.1:9");
        assert_eq!(config.server.timeout_ms, 250);
        assert_eq!(config.logging.level, "debug");
    }

    #[tokio::test]
    async fn test_config_file_round_trips_through_loader() {
        let config = TestConfigBuilder::new()
            .base_url("http://192.168.1.241:8088")
            .timeout_ms(1500)
            .build();
        let file = TestConfigFile::from_config(&config).await;

        let loaded = ClientConfig::load(file.path()).await.unwrap();
        assert_eq!(loaded, config);
    }
}
