use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_secretsmanager as secretsmanager;

pub struct SecretProbe;

#[async_trait]
impl ResourceProbe for SecretProbe {
    fn service(&self) -> &'static str {
        "Secrets Manager"
    }

    fn label(&self) -> &'static str {
        "Secrets"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = secretsmanager::Client::new(ctx.config);
        let mut paginator = client.list_secrets().into_paginator().send();

        let mut total = 0;
        while let Some(page) = paginator.next().await {
            let page = page?;
            total += page.secret_list.unwrap_or_default().len();
        }
        Ok(total)
    }
}
