use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_rds as rds;

pub struct DbInstanceProbe;

#[async_trait]
impl ResourceProbe for DbInstanceProbe {
    fn service(&self) -> &'static str {
        "RDS"
    }

    fn label(&self) -> &'static str {
        "DB Instances"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = rds::Client::new(ctx.config);
        let mut paginator = client.describe_db_instances().into_paginator().send();

        let mut total = 0;
        while let Some(result) = paginator.try_next().await? {
            total += result.db_instances.unwrap_or_default().len();
        }
        Ok(total)
    }
}
