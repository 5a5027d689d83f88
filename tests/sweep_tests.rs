//! Scan Orchestrator Tests
//!
//! Exercises the region sweep against in-crate fake probes, covering row
//! ordering, zero-count suppression, per-region failure isolation under both
//! failure policies, retry behavior, progress accounting, and global-probe
//! handling. No test touches the network.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use awsreport::app::config::RetryConfig;
use awsreport::app::scanner::probe::{ProbeContext, ResourceProbe};
use awsreport::app::scanner::sweep::{
    FailurePolicy, ScanOrchestrator, ScanPhase, ScanProgress, SweepSettings,
};
use awsreport::app::scanner::ScanCredentials;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ============================================================================
// Fake probes
// ============================================================================

/// Returns a fixed count everywhere; tracks how often it ran.
struct StaticProbe {
    label: &'static str,
    count: usize,
    global: bool,
    calls: Arc<AtomicUsize>,
}

impl StaticProbe {
    fn new(label: &'static str, count: usize) -> Self {
        Self {
            label,
            count,
            global: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn global(label: &'static str, count: usize) -> Self {
        Self {
            global: true,
            ..Self::new(label, count)
        }
    }

    fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl ResourceProbe for StaticProbe {
    fn service(&self) -> &'static str {
        "Fake"
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn is_global(&self) -> bool {
        self.global
    }

    async fn count(&self, _ctx: &ProbeContext<'_>) -> Result<usize> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.count)
    }
}

/// Fails with a fixed message, optionally only in one region.
struct FailingProbe {
    label: &'static str,
    message: &'static str,
    only_in_region: Option<&'static str>,
    fallback_count: usize,
    calls: Arc<AtomicUsize>,
}

impl FailingProbe {
    fn new(label: &'static str, message: &'static str) -> Self {
        Self {
            label,
            message,
            only_in_region: None,
            fallback_count: 0,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn only_in(mut self, region: &'static str, fallback_count: usize) -> Self {
        self.only_in_region = Some(region);
        self.fallback_count = fallback_count;
        self
    }

    fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl ResourceProbe for FailingProbe {
    fn service(&self) -> &'static str {
        "Fake"
    }

    fn label(&self) -> &'static str {
        self.label
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.only_in_region {
            Some(region) if region != ctx.region => Ok(self.fallback_count),
            _ => Err(anyhow!(self.message)),
        }
    }
}

/// Fails a fixed number of times, then succeeds.
struct FlakyProbe {
    label: &'static str,
    message: &'static str,
    failures_before_success: usize,
    count: usize,
    attempts: Arc<AtomicUsize>,
}

impl FlakyProbe {
    fn new(label: &'static str, message: &'static str, failures: usize, count: usize) -> Self {
        Self {
            label,
            message,
            failures_before_success: failures,
            count,
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn attempt_counter(&self) -> Arc<AtomicUsize> {
        self.attempts.clone()
    }
}

#[async_trait]
impl ResourceProbe for FlakyProbe {
    fn service(&self) -> &'static str {
        "Fake"
    }

    fn label(&self) -> &'static str {
        self.label
    }

    async fn count(&self, _ctx: &ProbeContext<'_>) -> Result<usize> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures_before_success {
            Err(anyhow!(self.message))
        } else {
            Ok(self.count)
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn settings(regions: &[&str], policy: FailurePolicy) -> SweepSettings {
    SweepSettings {
        regions: regions.iter().map(|r| r.to_string()).collect(),
        retry: RetryConfig {
            max_attempts: 3,
            base_delay_ms: 1,
        },
        failure_policy: policy,
    }
}

fn credentials() -> ScanCredentials {
    ScanCredentials::new("AKIAEXAMPLE", "test-secret", None)
}

fn labels(report: &awsreport::app::scanner::SweepReport) -> Vec<(String, String)> {
    report
        .rows
        .iter()
        .map(|row| (row.region.clone(), row.service.clone()))
        .collect()
}

// ============================================================================
// Ordering and aggregation
// ============================================================================

#[tokio::test]
async fn rows_follow_region_then_registry_order() {
    let probes: Vec<Box<dyn ResourceProbe>> = vec![
        Box::new(StaticProbe::new("Alpha", 1)),
        Box::new(StaticProbe::new("Beta", 2)),
    ];
    let mut orchestrator = ScanOrchestrator::new(
        settings(&["us-east-1", "eu-west-1"], FailurePolicy::AbandonRegion),
        probes,
    );

    let report = orchestrator.run(&credentials(), |_| {}).await.unwrap();

    assert_eq!(
        labels(&report),
        vec![
            ("us-east-1".to_string(), "Alpha".to_string()),
            ("us-east-1".to_string(), "Beta".to_string()),
            ("eu-west-1".to_string(), "Alpha".to_string()),
            ("eu-west-1".to_string(), "Beta".to_string()),
        ]
    );
    assert!(report.failures.is_empty());
    assert_eq!(orchestrator.phase(), ScanPhase::Done);
}

#[tokio::test]
async fn zero_counts_are_suppressed() {
    let probes: Vec<Box<dyn ResourceProbe>> = vec![
        Box::new(StaticProbe::new("Empty", 0)),
        Box::new(StaticProbe::new("Busy", 4)),
    ];
    let mut orchestrator = ScanOrchestrator::new(
        settings(&["us-east-1"], FailurePolicy::AbandonRegion),
        probes,
    );

    let report = orchestrator.run(&credentials(), |_| {}).await.unwrap();

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].service, "Busy");
    assert_eq!(report.rows[0].count, 4);
}

#[tokio::test]
async fn all_zero_sweep_yields_empty_report_without_error() {
    let probes: Vec<Box<dyn ResourceProbe>> = vec![
        Box::new(StaticProbe::new("Alpha", 0)),
        Box::new(StaticProbe::new("Beta", 0)),
    ];
    let mut orchestrator = ScanOrchestrator::new(
        settings(&["us-east-1", "eu-west-1"], FailurePolicy::AbandonRegion),
        probes,
    );

    let report = orchestrator.run(&credentials(), |_| {}).await.unwrap();

    assert!(report.rows.is_empty());
    assert!(report.failures.is_empty());
    assert_eq!(orchestrator.phase(), ScanPhase::Done);
}

// ============================================================================
// Failure isolation
// ============================================================================

#[tokio::test]
async fn abandon_policy_skips_rest_of_failing_region_only() {
    let before = StaticProbe::new("Before", 1);
    let failing = FailingProbe::new("Broken", "AccessDeniedException: nope").only_in("us-east-1", 5);
    let after = StaticProbe::new("After", 2);
    let after_calls = after.call_counter();

    let probes: Vec<Box<dyn ResourceProbe>> =
        vec![Box::new(before), Box::new(failing), Box::new(after)];
    let mut orchestrator = ScanOrchestrator::new(
        settings(&["us-east-1", "eu-west-1"], FailurePolicy::AbandonRegion),
        probes,
    );

    let report = orchestrator.run(&credentials(), |_| {}).await.unwrap();

    // us-east-1 keeps the row gathered before the failure, loses the rest.
    assert_eq!(
        labels(&report),
        vec![
            ("us-east-1".to_string(), "Before".to_string()),
            ("eu-west-1".to_string(), "Before".to_string()),
            ("eu-west-1".to_string(), "Broken".to_string()),
            ("eu-west-1".to_string(), "After".to_string()),
        ]
    );
    // "After" never ran in the abandoned region.
    assert_eq!(after_calls.load(Ordering::SeqCst), 1);

    assert_eq!(report.failures.len(), 1);
    let failure = &report.failures[0];
    assert_eq!(failure.region, "us-east-1");
    assert_eq!(failure.resource, "Broken");
}

#[tokio::test]
async fn continue_policy_keeps_probing_the_failing_region() {
    let failing = FailingProbe::new("Broken", "AccessDeniedException: nope").only_in("us-east-1", 5);
    let after = StaticProbe::new("After", 2);
    let after_calls = after.call_counter();

    let probes: Vec<Box<dyn ResourceProbe>> = vec![Box::new(failing), Box::new(after)];
    let mut orchestrator = ScanOrchestrator::new(
        settings(&["us-east-1", "eu-west-1"], FailurePolicy::ContinueRegion),
        probes,
    );

    let report = orchestrator.run(&credentials(), |_| {}).await.unwrap();

    assert_eq!(
        labels(&report),
        vec![
            ("us-east-1".to_string(), "After".to_string()),
            ("eu-west-1".to_string(), "Broken".to_string()),
            ("eu-west-1".to_string(), "After".to_string()),
        ]
    );
    assert_eq!(after_calls.load(Ordering::SeqCst), 2);
    assert_eq!(report.failures.len(), 1);
}

#[tokio::test]
async fn all_regions_failing_still_completes() {
    let probes: Vec<Box<dyn ResourceProbe>> = vec![Box::new(FailingProbe::new(
        "Broken",
        "AccessDeniedException: nope",
    ))];
    let mut orchestrator = ScanOrchestrator::new(
        settings(&["us-east-1", "eu-west-1"], FailurePolicy::AbandonRegion),
        probes,
    );

    let report = orchestrator.run(&credentials(), |_| {}).await.unwrap();

    assert!(report.rows.is_empty());
    assert_eq!(report.failures.len(), 2);
    assert_eq!(orchestrator.phase(), ScanPhase::Done);
}

// ============================================================================
// Retry
// ============================================================================

#[tokio::test]
async fn throttled_probe_is_retried_until_it_succeeds() {
    let flaky = FlakyProbe::new("Flaky", "ThrottlingException: Rate exceeded", 2, 5);
    let attempts = flaky.attempt_counter();

    let probes: Vec<Box<dyn ResourceProbe>> = vec![Box::new(flaky)];
    let mut orchestrator = ScanOrchestrator::new(
        settings(&["us-east-1"], FailurePolicy::AbandonRegion),
        probes,
    );

    let report = orchestrator.run(&credentials(), |_| {}).await.unwrap();

    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    assert!(report.failures.is_empty());
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].count, 5);
}

#[tokio::test]
async fn throttled_probe_fails_after_attempt_budget() {
    let flaky = FlakyProbe::new("Flaky", "ThrottlingException: Rate exceeded", 5, 5);
    let attempts = flaky.attempt_counter();

    let probes: Vec<Box<dyn ResourceProbe>> = vec![Box::new(flaky)];
    let mut orchestrator = ScanOrchestrator::new(
        settings(&["us-east-1"], FailurePolicy::AbandonRegion),
        probes,
    );

    let report = orchestrator.run(&credentials(), |_| {}).await.unwrap();

    assert_eq!(attempts.load(Ordering::SeqCst), 3);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].category.is_retryable());
}

#[tokio::test]
async fn non_retryable_failures_are_not_retried() {
    let failing = FailingProbe::new("Broken", "AccessDeniedException: not authorized");
    let calls = failing.call_counter();

    let probes: Vec<Box<dyn ResourceProbe>> = vec![Box::new(failing)];
    let mut orchestrator = ScanOrchestrator::new(
        settings(&["us-east-1"], FailurePolicy::AbandonRegion),
        probes,
    );

    let report = orchestrator.run(&credentials(), |_| {}).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(report.failures.len(), 1);
    assert!(!report.failures[0].category.is_retryable());
}

// ============================================================================
// Progress and global probes
// ============================================================================

#[tokio::test]
async fn progress_reaches_total_even_when_regions_fail() {
    let probes: Vec<Box<dyn ResourceProbe>> = vec![
        Box::new(FailingProbe::new("Broken", "AccessDeniedException: nope").only_in("us-east-1", 1)),
        Box::new(StaticProbe::new("After", 1)),
    ];
    let mut orchestrator = ScanOrchestrator::new(
        settings(&["us-east-1", "eu-west-1"], FailurePolicy::AbandonRegion),
        probes,
    );

    let mut snapshots: Vec<ScanProgress> = Vec::new();
    let report = orchestrator
        .run(&credentials(), |snapshot| snapshots.push(snapshot))
        .await
        .unwrap();

    assert_eq!(snapshots.len(), 4);
    assert!(snapshots.windows(2).all(|w| w[0].completed < w[1].completed));
    let last = snapshots.last().unwrap();
    assert_eq!(last.completed, 4);
    assert_eq!(last.total, 4);
    assert_eq!(last.percent(), 100);
    assert_eq!(report.failures.len(), 1);
}

#[tokio::test]
async fn global_probes_run_only_in_the_first_region() {
    let global = StaticProbe::global("Global", 3);
    let global_calls = global.call_counter();
    let regional = StaticProbe::new("Regional", 1);
    let regional_calls = regional.call_counter();

    let probes: Vec<Box<dyn ResourceProbe>> = vec![Box::new(global), Box::new(regional)];
    let mut orchestrator = ScanOrchestrator::new(
        settings(
            &["us-east-1", "us-west-2", "eu-west-1"],
            FailurePolicy::AbandonRegion,
        ),
        probes,
    );

    let mut snapshots: Vec<ScanProgress> = Vec::new();
    let report = orchestrator
        .run(&credentials(), |snapshot| snapshots.push(snapshot))
        .await
        .unwrap();

    assert_eq!(global_calls.load(Ordering::SeqCst), 1);
    assert_eq!(regional_calls.load(Ordering::SeqCst), 3);

    let global_rows: Vec<&str> = report
        .rows
        .iter()
        .filter(|row| row.service == "Global")
        .map(|row| row.region.as_str())
        .collect();
    assert_eq!(global_rows, vec!["us-east-1"]);

    // Skipped global steps still advance the progress counter.
    assert_eq!(snapshots.last().unwrap().completed, 6);
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn invalid_credentials_abort_before_any_probe_runs() {
    let probe = StaticProbe::new("Alpha", 1);
    let calls = probe.call_counter();

    let probes: Vec<Box<dyn ResourceProbe>> = vec![Box::new(probe)];
    let mut orchestrator = ScanOrchestrator::new(
        settings(&["us-east-1"], FailurePolicy::AbandonRegion),
        probes,
    );

    let empty = ScanCredentials::new("", "", None);
    let result = orchestrator.run(&empty, |_| {}).await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(orchestrator.phase(), ScanPhase::Idle);
}
