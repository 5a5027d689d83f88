use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_cloudfront as cloudfront;

/// Distributions are a global resource; counted once per sweep.
pub struct DistributionProbe;

#[async_trait]
impl ResourceProbe for DistributionProbe {
    fn service(&self) -> &'static str {
        "CloudFront"
    }

    fn label(&self) -> &'static str {
        "Distributions"
    }

    fn is_global(&self) -> bool {
        true
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = cloudfront::Client::new(ctx.config);

        let mut total = 0;
        let mut marker: Option<String> = None;
        loop {
            let mut request = client.list_distributions();
            if let Some(ref marker_value) = marker {
                request = request.marker(marker_value);
            }
            let response = request.send().await?;

            let Some(distribution_list) = response.distribution_list else {
                break;
            };
            if let Some(ref items) = distribution_list.items {
                total += items.len();
            }
            if distribution_list.is_truncated && distribution_list.next_marker.is_some() {
                marker = distribution_list.next_marker;
            } else {
                break;
            }
        }
        Ok(total)
    }
}
