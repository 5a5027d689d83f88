use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_dynamodb as dynamodb;

pub struct TableProbe;

#[async_trait]
impl ResourceProbe for TableProbe {
    fn service(&self) -> &'static str {
        "DynamoDB"
    }

    fn label(&self) -> &'static str {
        "Tables"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = dynamodb::Client::new(ctx.config);
        let mut paginator = client.list_tables().into_paginator().send();

        let mut total = 0;
        while let Some(page) = paginator.next().await {
            let page = page?;
            total += page.table_names.unwrap_or_default().len();
        }
        Ok(total)
    }
}
