//! Request-level error taxonomy.
//!
//! Three failure classes exist, each with a distinct blast radius:
//!
//! - [`ValidationError`] - bad input, fatal to the request before any work
//! - [`RemoteQueryError`] - one probe failed remotely, recovered at the
//!   region boundary
//! - [`RenderError`] - report rendering failed, fatal once data exists

use crate::app::scanner::sdk_errors::ErrorCategory;
use thiserror::Error;

/// Rejected request input. No scan work is attempted after this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// A single probe invocation failed against the remote API.
///
/// Captured by the orchestrator at the region boundary; the sweep continues
/// with the next region (or next probe, depending on the configured failure
/// policy). The `category` classifies the underlying SDK error so callers
/// can distinguish throttling from permission problems.
#[derive(Debug, Clone, Error)]
#[error("{service} {resource} query failed in region {region}: {message}")]
pub struct RemoteQueryError {
    pub region: String,
    pub service: String,
    pub resource: String,
    pub message: String,
    pub category: ErrorCategory,
}

/// Report rendering failed. Fatal for the request; no partial artifact is
/// produced.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Template(#[from] handlebars::RenderError),
    #[error("report assembly failed: {0}")]
    Assembly(String),
}

impl From<std::fmt::Error> for RenderError {
    fn from(err: std::fmt::Error) -> Self {
        RenderError::Assembly(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_query_error_names_region_and_service() {
        let error = RemoteQueryError {
            region: "us-east-1".to_string(),
            service: "EC2".to_string(),
            resource: "VPCs".to_string(),
            message: "AccessDenied".to_string(),
            category: ErrorCategory::NonRetryable {
                code: "AccessDenied".to_string(),
                is_permission_error: true,
            },
        };
        let rendered = error.to_string();
        assert!(rendered.contains("us-east-1"));
        assert!(rendered.contains("EC2"));
        assert!(rendered.contains("VPCs"));
    }

    #[test]
    fn validation_error_displays_message() {
        let error = ValidationError("access key is required".to_string());
        assert_eq!(error.to_string(), "access key is required");
    }
}
