//! The region sweep orchestrator.
//!
//! Sweeps the configured region x probe matrix sequentially: one probe call
//! at a time, regions in declared order, probes in registry order. Successful
//! non-zero counts become rows of the aggregated report; failures are
//! captured per region and never abort the overall sweep.
//!
//! What happens to a region after one of its probes fails is an explicit
//! policy, not an accident of error propagation: see [`FailurePolicy`].

use crate::app::config::RetryConfig;
use crate::app::errors::{RemoteQueryError, ValidationError};
use crate::app::scanner::credentials::ScanCredentials;
use crate::app::scanner::probe::{ProbeContext, ResourceProbe};
use crate::app::scanner::sdk_errors::categorize_error;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// One reportable resource count. Only counts above zero become rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanRow {
    pub region: String,
    pub service: String,
    pub count: u64,
}

/// Everything one sweep produced: aggregated rows in region-then-registry
/// order, plus every failure captured along the way.
///
/// An empty `rows` list is a valid outcome ("no reportable resources"), not
/// an error; `failures` tells the two apart from "all regions failed".
#[derive(Debug, Default)]
pub struct SweepReport {
    pub rows: Vec<ScanRow>,
    pub failures: Vec<RemoteQueryError>,
}

/// Orchestrator lifecycle. A started sweep always runs to `Done`; there is
/// no cancellation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Scanning,
    Done,
}

/// What happens to the rest of a region after one of its probes fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Skip the failing region's remaining probes and continue with the next
    /// region.
    AbandonRegion,
    /// Record the failure and keep probing the same region.
    ContinueRegion,
}

/// Advisory progress snapshot emitted after every matrix step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanProgress {
    pub completed: usize,
    pub total: usize,
}

impl ScanProgress {
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed * 100) / self.total) as u8
    }
}

/// Scan-relevant configuration handed to the orchestrator at construction.
#[derive(Debug, Clone)]
pub struct SweepSettings {
    pub regions: Vec<String>,
    pub retry: RetryConfig,
    pub failure_policy: FailurePolicy,
}

/// Drives all registered probes across all configured regions.
///
/// One orchestrator serves exactly one scan request; the aggregated report it
/// accumulates is never shared with another request.
pub struct ScanOrchestrator {
    settings: SweepSettings,
    probes: Vec<Box<dyn ResourceProbe>>,
    phase: ScanPhase,
}

impl ScanOrchestrator {
    pub fn new(settings: SweepSettings, probes: Vec<Box<dyn ResourceProbe>>) -> Self {
        Self {
            settings,
            probes,
            phase: ScanPhase::Idle,
        }
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// Total number of matrix steps, the denominator for progress fractions.
    pub fn total_steps(&self) -> usize {
        self.settings.regions.len() * self.probes.len()
    }

    /// Validate the credentials and sweep the full matrix.
    ///
    /// Fails only on invalid credentials, before any probe runs. Remote
    /// failures are captured inside the returned [`SweepReport`]. The
    /// progress callback fires after every step, including steps skipped
    /// because their region was abandoned or their probe is global; the
    /// counter therefore always reaches `total_steps()`.
    pub async fn run<F>(
        &mut self,
        credentials: &ScanCredentials,
        mut progress: F,
    ) -> Result<SweepReport, ValidationError>
    where
        F: FnMut(ScanProgress) + Send,
    {
        credentials.validate()?;
        self.phase = ScanPhase::Scanning;

        let total = self.total_steps();
        let mut completed = 0usize;
        let mut report = SweepReport::default();

        for (region_index, region) in self.settings.regions.iter().enumerate() {
            let config = credentials.sdk_config(region).await;
            let ctx = ProbeContext {
                region,
                config: &config,
            };
            let mut abandoned = false;

            for probe in &self.probes {
                let skip_global = probe.is_global() && region_index != 0;
                if abandoned || skip_global {
                    completed += 1;
                    progress(ScanProgress { completed, total });
                    continue;
                }

                match invoke_with_retry(probe.as_ref(), &ctx, &self.settings.retry).await {
                    Ok(count) => {
                        debug!(
                            region = %region,
                            service = probe.service(),
                            resource = probe.label(),
                            count,
                            "probe completed"
                        );
                        if count > 0 {
                            report.rows.push(ScanRow {
                                region: region.clone(),
                                service: probe.label().to_string(),
                                count: count as u64,
                            });
                        }
                    }
                    Err(error) => {
                        warn!(
                            region = %region,
                            service = error.service.as_str(),
                            resource = error.resource.as_str(),
                            category = error.category.short_label(),
                            "probe failed: {}",
                            error.message
                        );
                        report.failures.push(error);
                        if self.settings.failure_policy == FailurePolicy::AbandonRegion {
                            abandoned = true;
                        }
                    }
                }

                completed += 1;
                progress(ScanProgress { completed, total });
            }
        }

        self.phase = ScanPhase::Done;
        info!(
            rows = report.rows.len(),
            failures = report.failures.len(),
            "sweep finished"
        );
        Ok(report)
    }
}

/// Invoke one probe, retrying throttling-class failures with exponential
/// backoff until the attempt budget is spent.
async fn invoke_with_retry(
    probe: &dyn ResourceProbe,
    ctx: &ProbeContext<'_>,
    retry: &RetryConfig,
) -> Result<usize, RemoteQueryError> {
    let mut attempt = 1u32;
    loop {
        match probe.count(ctx).await {
            Ok(count) => return Ok(count),
            Err(error) => {
                let category = categorize_error(&error);
                if category.is_retryable() && attempt < retry.max_attempts {
                    let delay = retry.base_delay() * 2u32.saturating_pow(attempt - 1);
                    debug!(
                        region = %ctx.region,
                        service = probe.service(),
                        resource = probe.label(),
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "retrying probe after {} failure",
                        category.short_label()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                    continue;
                }
                return Err(RemoteQueryError {
                    region: ctx.region.to_string(),
                    service: probe.service().to_string(),
                    resource: probe.label().to_string(),
                    message: format!("{:#}", error),
                    category,
                });
            }
        }
    }
}
