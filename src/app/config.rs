//! Application configuration.
//!
//! Loaded from a TOML file when one exists, otherwise every field falls back
//! to its default. The region list and scan behavior are plain data handed to
//! the orchestrator at construction; nothing here is process-global.

use crate::app::scanner::sweep::FailurePolicy;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Regions swept when no configuration file overrides them.
const DEFAULT_REGIONS: [&str; 4] = ["us-east-1", "us-west-2", "eu-west-1", "ap-south-1"];

/// Top-level configuration for the server and the scan sweep.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to.
    pub listen: String,
    /// Regions swept in declared order.
    pub regions: Vec<String>,
    pub delivery: DeliveryConfig,
    pub retry: RetryConfig,
    pub scan: ScanConfig,
}

/// How the generated report reaches the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeliveryConfig {
    pub mode: DeliveryMode,
    /// Target path for [`DeliveryMode::File`]. Ignored when streaming.
    pub path: PathBuf,
}

/// The report is always streamed back as an attachment; `File` additionally
/// persists the bytes to [`DeliveryConfig::path`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMode {
    Stream,
    File,
}

/// Bounded retry for throttling-class probe failures.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetryConfig {
    /// Total attempts per probe, including the first.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles per subsequent attempt.
    pub base_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub failure_policy: FailurePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:8080".to_string(),
            regions: DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect(),
            delivery: DeliveryConfig::default(),
            retry: RetryConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            mode: DeliveryMode::Stream,
            path: PathBuf::from("aws_services_report.pdf"),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 200,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::AbandonRegion,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist. A present-but-invalid file is an error, not a silent
    /// fallback.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

impl RetryConfig {
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }
}
