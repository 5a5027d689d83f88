use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_cloudformation as cfn;

pub struct StackProbe;

#[async_trait]
impl ResourceProbe for StackProbe {
    fn service(&self) -> &'static str {
        "CloudFormation"
    }

    fn label(&self) -> &'static str {
        "Stacks"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = cfn::Client::new(ctx.config);
        let mut paginator = client.describe_stacks().into_paginator().send();

        let mut total = 0;
        while let Some(result) = paginator.try_next().await? {
            total += result.stacks.unwrap_or_default().len();
        }
        Ok(total)
    }
}
