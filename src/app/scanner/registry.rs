//! The probe registry.
//!
//! A declarative, ordered list consumed by the sweep loop. Registration order
//! is part of the report's observable row ordering, so entries are
//! append-only: new resource kinds go at the end of their service block.

use crate::app::scanner::aws_services::{
    autoscaling, batch, cloudformation, cloudfront, cloudwatch, codedeploy, dynamodb, ec2, ecs,
    elasticbeanstalk, elb, iam, lambda, opensearch, rds, s3, secretsmanager, sns, sqs, wafv2,
};
use crate::app::scanner::probe::ResourceProbe;

/// Every probe the sweep runs, in registration order.
pub fn default_registry() -> Vec<Box<dyn ResourceProbe>> {
    vec![
        Box::new(ec2::VpcProbe),
        Box::new(ec2::SubnetProbe),
        Box::new(ec2::InternetGatewayProbe),
        Box::new(ec2::NatGatewayProbe),
        Box::new(ec2::RouteTableProbe),
        Box::new(ec2::SecurityGroupProbe),
        Box::new(ec2::InstanceProbe),
        Box::new(rds::DbInstanceProbe),
        Box::new(s3::BucketProbe),
        Box::new(iam::UserProbe),
        Box::new(iam::RoleProbe),
        Box::new(lambda::FunctionProbe),
        Box::new(dynamodb::TableProbe),
        Box::new(cloudwatch::AlarmProbe),
        Box::new(ecs::ClusterProbe),
        Box::new(elb::LoadBalancerProbe),
        Box::new(opensearch::DomainProbe),
        Box::new(cloudformation::StackProbe),
        Box::new(cloudfront::DistributionProbe),
        Box::new(autoscaling::AutoScalingGroupProbe),
        Box::new(wafv2::WebAclProbe),
        Box::new(secretsmanager::SecretProbe),
        Box::new(sns::SubscriptionProbe),
        Box::new(sqs::QueueProbe),
        Box::new(elasticbeanstalk::EnvironmentProbe),
        Box::new(codedeploy::ApplicationProbe),
        Box::new(batch::ComputeEnvironmentProbe),
        Box::new(batch::JobQueueProbe),
    ]
}
