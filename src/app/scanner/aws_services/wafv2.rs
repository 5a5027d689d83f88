use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_wafv2 as wafv2;

/// Regional-scope Web ACLs; CloudFront-scope ACLs only exist in us-east-1
/// and are not part of the per-region inventory.
pub struct WebAclProbe;

#[async_trait]
impl ResourceProbe for WebAclProbe {
    fn service(&self) -> &'static str {
        "WAF"
    }

    fn label(&self) -> &'static str {
        "Web ACLs"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = wafv2::Client::new(ctx.config);
        let response = client
            .list_web_acls()
            .scope(wafv2::types::Scope::Regional)
            .send()
            .await?;
        Ok(response.web_acls.unwrap_or_default().len())
    }
}
