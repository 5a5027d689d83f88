use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_elasticbeanstalk as elasticbeanstalk;

pub struct EnvironmentProbe;

#[async_trait]
impl ResourceProbe for EnvironmentProbe {
    fn service(&self) -> &'static str {
        "Elastic Beanstalk"
    }

    fn label(&self) -> &'static str {
        "Environments"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = elasticbeanstalk::Client::new(ctx.config);
        let response = client.describe_environments().send().await?;
        Ok(response.environments.unwrap_or_default().len())
    }
}
