use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_lambda as lambda;

pub struct FunctionProbe;

#[async_trait]
impl ResourceProbe for FunctionProbe {
    fn service(&self) -> &'static str {
        "Lambda"
    }

    fn label(&self) -> &'static str {
        "Functions"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = lambda::Client::new(ctx.config);
        let mut paginator = client.list_functions().into_paginator().send();

        let mut total = 0;
        while let Some(page) = paginator.next().await {
            let page = page?;
            total += page.functions.unwrap_or_default().len();
        }
        Ok(total)
    }
}
