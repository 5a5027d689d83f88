use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_codedeploy as codedeploy;

pub struct ApplicationProbe;

#[async_trait]
impl ResourceProbe for ApplicationProbe {
    fn service(&self) -> &'static str {
        "CodeDeploy"
    }

    fn label(&self) -> &'static str {
        "Applications"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = codedeploy::Client::new(ctx.config);

        let mut total = 0;
        let mut next_token: Option<String> = None;
        loop {
            let mut request = client.list_applications();
            if let Some(token) = next_token {
                request = request.next_token(token);
            }
            let response = request.send().await?;

            total += response.applications.unwrap_or_default().len();

            next_token = response.next_token;
            if next_token.is_none() {
                break;
            }
        }
        Ok(total)
    }
}
