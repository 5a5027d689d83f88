use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_ecs as ecs;

pub struct ClusterProbe;

#[async_trait]
impl ResourceProbe for ClusterProbe {
    fn service(&self) -> &'static str {
        "ECS"
    }

    fn label(&self) -> &'static str {
        "Clusters"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = ecs::Client::new(ctx.config);
        let mut paginator = client.list_clusters().into_paginator().send();

        let mut total = 0;
        while let Some(page) = paginator.next().await {
            let page = page?;
            total += page.cluster_arns.unwrap_or_default().len();
        }
        Ok(total)
    }
}
