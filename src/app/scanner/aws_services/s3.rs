use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3 as s3;

/// Bucket listing is account-wide; the probe is marked global so the sweep
/// counts buckets once instead of once per region.
pub struct BucketProbe;

#[async_trait]
impl ResourceProbe for BucketProbe {
    fn service(&self) -> &'static str {
        "S3"
    }

    fn label(&self) -> &'static str {
        "Buckets"
    }

    fn is_global(&self) -> bool {
        true
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = s3::Client::new(ctx.config);
        let response = client.list_buckets().send().await?;
        Ok(response.buckets.unwrap_or_default().len())
    }
}
