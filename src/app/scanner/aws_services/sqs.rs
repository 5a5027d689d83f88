use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_sqs as sqs;

pub struct QueueProbe;

#[async_trait]
impl ResourceProbe for QueueProbe {
    fn service(&self) -> &'static str {
        "SQS"
    }

    fn label(&self) -> &'static str {
        "Queues"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = sqs::Client::new(ctx.config);
        let mut paginator = client.list_queues().into_paginator().send();

        let mut total = 0;
        while let Some(page) = paginator.next().await {
            let page = page?;
            total += page.queue_urls.unwrap_or_default().len();
        }
        Ok(total)
    }
}
