use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_sns as sns;

pub struct SubscriptionProbe;

#[async_trait]
impl ResourceProbe for SubscriptionProbe {
    fn service(&self) -> &'static str {
        "SNS"
    }

    fn label(&self) -> &'static str {
        "Subscriptions"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = sns::Client::new(ctx.config);
        let mut paginator = client.list_subscriptions().into_paginator().send();

        let mut total = 0;
        while let Some(page) = paginator.next().await {
            let page = page?;
            total += page.subscriptions.unwrap_or_default().len();
        }
        Ok(total)
    }
}
