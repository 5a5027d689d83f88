use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_batch as batch;

pub struct ComputeEnvironmentProbe;

#[async_trait]
impl ResourceProbe for ComputeEnvironmentProbe {
    fn service(&self) -> &'static str {
        "Batch"
    }

    fn label(&self) -> &'static str {
        "Compute Environments"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = batch::Client::new(ctx.config);

        let mut total = 0;
        let mut next_token: Option<String> = None;
        loop {
            let mut request = client.describe_compute_environments().max_results(100);
            if let Some(ref token) = next_token {
                request = request.next_token(token);
            }
            let response = request.send().await?;

            total += response.compute_environments.unwrap_or_default().len();

            if let Some(token) = response.next_token {
                next_token = Some(token);
            } else {
                break;
            }
        }
        Ok(total)
    }
}

pub struct JobQueueProbe;

#[async_trait]
impl ResourceProbe for JobQueueProbe {
    fn service(&self) -> &'static str {
        "Batch"
    }

    fn label(&self) -> &'static str {
        "Job Queues"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = batch::Client::new(ctx.config);

        let mut total = 0;
        let mut next_token: Option<String> = None;
        loop {
            let mut request = client.describe_job_queues().max_results(100);
            if let Some(ref token) = next_token {
                request = request.next_token(token);
            }
            let response = request.send().await?;

            total += response.job_queues.unwrap_or_default().len();

            if let Some(token) = response.next_token {
                next_token = Some(token);
            } else {
                break;
            }
        }
        Ok(total)
    }
}
