use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_opensearch as opensearch;

pub struct DomainProbe;

#[async_trait]
impl ResourceProbe for DomainProbe {
    fn service(&self) -> &'static str {
        "OpenSearch"
    }

    fn label(&self) -> &'static str {
        "Domains"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = opensearch::Client::new(ctx.config);
        let response = client.list_domain_names().send().await?;
        Ok(response.domain_names.unwrap_or_default().len())
    }
}
