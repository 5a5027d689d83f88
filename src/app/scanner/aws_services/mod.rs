//! Per-service resource probes.
//!
//! One module per AWS service; each module defines a probe per resource kind
//! it counts. Pagination follows what the service API offers: SDK paginators
//! where generated, manual marker/token loops otherwise.

pub mod autoscaling;
pub mod batch;
pub mod cloudformation;
pub mod cloudfront;
pub mod cloudwatch;
pub mod codedeploy;
pub mod dynamodb;
pub mod ec2;
pub mod ecs;
pub mod elasticbeanstalk;
pub mod elb;
pub mod iam;
pub mod lambda;
pub mod opensearch;
pub mod rds;
pub mod s3;
pub mod secretsmanager;
pub mod sns;
pub mod sqs;
pub mod wafv2;
