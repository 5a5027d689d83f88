use super::super::probe::{ProbeContext, ResourceProbe};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_ec2 as ec2;

pub struct VpcProbe;

#[async_trait]
impl ResourceProbe for VpcProbe {
    fn service(&self) -> &'static str {
        "EC2"
    }

    fn label(&self) -> &'static str {
        "VPCs"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = ec2::Client::new(ctx.config);
        let response = client.describe_vpcs().send().await?;
        Ok(response.vpcs.unwrap_or_default().len())
    }
}

pub struct SubnetProbe;

#[async_trait]
impl ResourceProbe for SubnetProbe {
    fn service(&self) -> &'static str {
        "EC2"
    }

    fn label(&self) -> &'static str {
        "Subnets"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = ec2::Client::new(ctx.config);
        let response = client.describe_subnets().send().await?;
        Ok(response.subnets.unwrap_or_default().len())
    }
}

pub struct InternetGatewayProbe;

#[async_trait]
impl ResourceProbe for InternetGatewayProbe {
    fn service(&self) -> &'static str {
        "EC2"
    }

    fn label(&self) -> &'static str {
        "Internet Gateways"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = ec2::Client::new(ctx.config);
        let mut paginator = client.describe_internet_gateways().into_paginator().send();

        let mut total = 0;
        while let Some(result) = paginator.try_next().await? {
            total += result.internet_gateways.unwrap_or_default().len();
        }
        Ok(total)
    }
}

pub struct NatGatewayProbe;

#[async_trait]
impl ResourceProbe for NatGatewayProbe {
    fn service(&self) -> &'static str {
        "EC2"
    }

    fn label(&self) -> &'static str {
        "NAT Gateways"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = ec2::Client::new(ctx.config);
        let mut paginator = client.describe_nat_gateways().into_paginator().send();

        let mut total = 0;
        while let Some(result) = paginator.try_next().await? {
            total += result.nat_gateways.unwrap_or_default().len();
        }
        Ok(total)
    }
}

pub struct RouteTableProbe;

#[async_trait]
impl ResourceProbe for RouteTableProbe {
    fn service(&self) -> &'static str {
        "EC2"
    }

    fn label(&self) -> &'static str {
        "Route Tables"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = ec2::Client::new(ctx.config);
        let mut paginator = client.describe_route_tables().into_paginator().send();

        let mut total = 0;
        while let Some(result) = paginator.try_next().await? {
            total += result.route_tables.unwrap_or_default().len();
        }
        Ok(total)
    }
}

pub struct SecurityGroupProbe;

#[async_trait]
impl ResourceProbe for SecurityGroupProbe {
    fn service(&self) -> &'static str {
        "EC2"
    }

    fn label(&self) -> &'static str {
        "Security Groups"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = ec2::Client::new(ctx.config);
        let mut paginator = client.describe_security_groups().into_paginator().send();

        let mut total = 0;
        while let Some(result) = paginator.try_next().await? {
            total += result.security_groups.unwrap_or_default().len();
        }
        Ok(total)
    }
}

pub struct InstanceProbe;

#[async_trait]
impl ResourceProbe for InstanceProbe {
    fn service(&self) -> &'static str {
        "EC2"
    }

    fn label(&self) -> &'static str {
        "Instances"
    }

    async fn count(&self, ctx: &ProbeContext<'_>) -> Result<usize> {
        let client = ec2::Client::new(ctx.config);
        let mut paginator = client.describe_instances().into_paginator().send();

        let mut total = 0;
        while let Some(result) = paginator.try_next().await? {
            for reservation in result.reservations.unwrap_or_default() {
                total += reservation.instances.unwrap_or_default().len();
            }
        }
        Ok(total)
    }
}
