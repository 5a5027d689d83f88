use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_cloudwatch as cloudwatch;

pub struct AlarmProbe;

#[async_trait]
impl ResourceProbe for AlarmProbe {
    fn service(&self) -> &'static str {
        "CloudWatch"
    }

    fn label(&self) -> &'static str {
        "Alarms"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = cloudwatch::Client::new(ctx.config);
        let mut paginator = client.describe_alarms().into_paginator().send();

        let mut total = 0;
        while let Some(page) = paginator.next().await {
            let page = page?;
            total += page.metric_alarms.unwrap_or_default().len();
        }
        Ok(total)
    }
}
