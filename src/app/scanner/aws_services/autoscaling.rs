use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_autoscaling as autoscaling;

pub struct AutoScalingGroupProbe;

#[async_trait]
impl ResourceProbe for AutoScalingGroupProbe {
    fn service(&self) -> &'static str {
        "Auto Scaling"
    }

    fn label(&self) -> &'static str {
        "Auto Scaling Groups"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = autoscaling::Client::new(ctx.config);
        let mut paginator = client
            .describe_auto_scaling_groups()
            .into_paginator()
            .send();

        let mut total = 0;
        while let Some(page) = paginator.next().await {
            let page = page?;
            total += page.auto_scaling_groups.unwrap_or_default().len();
        }
        Ok(total)
    }
}
