//! The probe abstraction.
//!
//! A probe answers one question: how many resources of one kind exist in one
//! region? Probes hold no state and never retry internally; retry policy
//! belongs to the orchestrator.

use anyhow::Result;
use async_trait::async_trait;

/// Per-region context handed to every probe invocation.
///
/// The SDK config is assembled once per region by the orchestrator and shared
/// by all probes sweeping that region.
pub struct ProbeContext<'a> {
    pub region: &'a str,
    pub config: &'a aws_config::SdkConfig,
}

/// A single (service, resource kind) counting query.
#[async_trait]
pub trait ResourceProbe: Send + Sync {
    /// AWS service the probe belongs to, e.g. `"EC2"`.
    fn service(&self) -> &'static str;

    /// Resource label shown in the report, e.g. `"VPCs"`.
    fn label(&self) -> &'static str;

    /// Global services return the same data from every region; the
    /// orchestrator queries them only in the first configured region.
    fn is_global(&self) -> bool {
        false
    }

    /// Count the resources of this kind visible in the context's region.
    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize>;
}
