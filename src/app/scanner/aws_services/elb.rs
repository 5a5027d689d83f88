use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_elasticloadbalancing as elb;

pub struct LoadBalancerProbe;

#[async_trait]
impl ResourceProbe for LoadBalancerProbe {
    fn service(&self) -> &'static str {
        "ELB"
    }

    fn label(&self) -> &'static str {
        "Load Balancers"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = elb::Client::new(ctx.config);
        let response = client.describe_load_balancers().send().await?;
        Ok(response.load_balancer_descriptions.unwrap_or_default().len())
    }
}
