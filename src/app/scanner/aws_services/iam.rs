use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_iam as iam;

pub struct UserProbe;

#[async_trait]
impl ResourceProbe for UserProbe {
    fn service(&self) -> &'static str {
        "IAM"
    }

    fn label(&self) -> &'static str {
        "Users"
    }

    fn is_global(&self) -> bool {
        true
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = iam::Client::new(ctx.config);

        // IAM has no generated paginator for this call; page manually.
        let mut total = 0;
        let mut marker: Option<String> = None;
        loop {
            let mut request = client.list_users().max_items(100);
            if let Some(m) = &marker {
                request = request.marker(m);
            }
            let response = request.send().await?;
            total += response.users.len();
            if response.is_truncated && response.marker.is_some() {
                marker = response.marker;
            } else {
                break;
            }
        }
        Ok(total)
    }
}

pub struct RoleProbe;

#[async_trait]
impl ResourceProbe for RoleProbe {
    fn service(&self) -> &'static str {
        "IAM"
    }

    fn label(&self) -> &'static str {
        "Roles"
    }

    fn is_global(&self) -> bool {
        true
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = iam::Client::new(ctx.config);

        let mut total = 0;
        let mut marker: Option<String> = None;
        loop {
            let mut request = client.list_roles().max_items(100);
            if let Some(m) = &marker {
                request = request.marker(m);
            }
            let response = request.send().await?;
            total += response.roles.len();
            if response.is_truncated && response.marker.is_some() {
                marker = response.marker;
            } else {
                break;
            }
        }
        Ok(total)
    }
}
