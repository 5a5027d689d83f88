//! AWS SDK error categorization.
//!
//! Distinguishes retryable transient errors (throttling, timeouts, network
//! issues, service unavailability) from non-retryable ones (permissions,
//! validation). The orchestrator consults the category to decide whether a
//! failed probe gets another attempt before the failure is recorded.

/// Categorized error classes for failed probe invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Request was throttled due to rate limiting.
    Throttled { code: String },
    /// Request timed out.
    Timeout,
    /// Network connectivity problem.
    Network,
    /// AWS service temporarily unavailable.
    ServiceUnavailable,
    /// Permissions, validation, or other errors a retry cannot fix.
    NonRetryable {
        code: String,
        is_permission_error: bool,
    },
}

impl ErrorCategory {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Throttled { .. }
                | ErrorCategory::Timeout
                | ErrorCategory::Network
                | ErrorCategory::ServiceUnavailable
        )
    }

    /// Short label for log lines and report notes.
    pub fn short_label(&self) -> &'static str {
        match self {
            ErrorCategory::Throttled { .. } => "throttled",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Network => "network",
            ErrorCategory::ServiceUnavailable => "unavailable",
            ErrorCategory::NonRetryable { .. } => "error",
        }
    }
}

/// Categorize an error surfaced through `anyhow` from an SDK call.
///
/// SDK error payloads hide most detail behind the `Debug` representation, so
/// classification falls back to it when `Display` only says "service error".
pub fn categorize_error(error: &anyhow::Error) -> ErrorCategory {
    let error_str = error.to_string();
    let error_debug = format!("{:?}", error);
    let detail = if error_str.contains("service error") {
        &error_debug
    } else {
        &error_str
    };
    categorize_error_string(detail)
}

/// Categorize an error based on its string representation.
///
/// Handles the common patterns seen in AWS SDK error messages.
pub fn categorize_error_string(error_str: &str) -> ErrorCategory {
    // Throttling errors (most common transient error)
    if error_str.contains("ThrottlingException")
        || error_str.contains("Throttling")
        || error_str.contains("TooManyRequestsException")
        || error_str.contains("RequestLimitExceeded")
        || error_str.contains("LimitExceededException")
        || error_str.contains("RateExceeded")
    {
        let code = extract_error_code(error_str).unwrap_or_else(|| "Throttling".to_string());
        return ErrorCategory::Throttled { code };
    }

    if error_str.contains("TimeoutError")
        || error_str.contains("timeout")
        || error_str.contains("timed out")
        || error_str.contains("deadline exceeded")
    {
        return ErrorCategory::Timeout;
    }

    if error_str.contains("DispatchFailure")
        || error_str.contains("connection")
        || error_str.contains("Connection")
        || error_str.contains("network")
        || error_str.contains("Network")
        || error_str.contains("DNS")
        || error_str.contains("socket")
    {
        return ErrorCategory::Network;
    }

    if error_str.contains("ServiceUnavailable")
        || error_str.contains("InternalServerError")
        || error_str.contains("InternalServerException")
        || error_str.contains("InternalError")
        || error_str.contains("503")
    {
        return ErrorCategory::ServiceUnavailable;
    }

    let is_permission_error = error_str.contains("AccessDenied")
        || error_str.contains("AccessDeniedException")
        || error_str.contains("UnauthorizedOperation")
        || error_str.contains("UnauthorizedAccess")
        || error_str.contains("AuthFailure")
        || error_str.contains("InvalidClientTokenId")
        || error_str.contains("SignatureDoesNotMatch");

    let code = extract_error_code(error_str).unwrap_or_else(|| {
        if is_permission_error {
            "AccessDenied".to_string()
        } else {
            "Error".to_string()
        }
    });

    ErrorCategory::NonRetryable {
        code,
        is_permission_error,
    }
}

/// Extract an AWS error code from the message if one is present.
fn extract_error_code(error_str: &str) -> Option<String> {
    // Pattern 1: "ErrorName: message"
    if let Some(pos) = error_str.find(':') {
        let prefix = error_str[..pos].trim();
        if prefix.ends_with("Exception")
            || prefix.ends_with("Error")
            || prefix.chars().next().is_some_and(|c| c.is_uppercase())
        {
            let code = prefix.rsplit("::").next().unwrap_or(prefix);
            if !code.is_empty() && code.len() < 50 {
                return Some(code.to_string());
            }
        }
    }

    // Pattern 2: code: "ErrorName" in debug output
    if let Some(start) = error_str.find("code:") {
        let after_code = &error_str[start + 5..];
        if let Some(quote_start) = after_code.find('"') {
            let after_quote = &after_code[quote_start + 1..];
            if let Some(quote_end) = after_quote.find('"') {
                let code = &after_quote[..quote_end];
                if !code.is_empty() && code.len() < 50 {
                    return Some(code.to_string());
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorizes_throttling() {
        let category = categorize_error_string("ThrottlingException: Rate exceeded");
        assert!(matches!(category, ErrorCategory::Throttled { .. }));
        assert!(category.is_retryable());
    }

    #[test]
    fn categorizes_too_many_requests() {
        let category = categorize_error_string("TooManyRequestsException: Request rate too high");
        assert!(matches!(category, ErrorCategory::Throttled { .. }));
    }

    #[test]
    fn categorizes_timeout() {
        let category = categorize_error_string("TimeoutError: request timed out after 30s");
        assert_eq!(category, ErrorCategory::Timeout);
        assert!(category.is_retryable());
    }

    #[test]
    fn categorizes_network_error() {
        let category = categorize_error_string("DispatchFailure: connection refused");
        assert_eq!(category, ErrorCategory::Network);
        assert!(category.is_retryable());
    }

    #[test]
    fn categorizes_service_unavailable() {
        let category =
            categorize_error_string("ServiceUnavailable: The service is currently unavailable");
        assert_eq!(category, ErrorCategory::ServiceUnavailable);
        assert!(category.is_retryable());
    }

    #[test]
    fn categorizes_access_denied_as_permission_error() {
        let category = categorize_error_string("AccessDeniedException: User is not authorized");
        assert!(matches!(
            category,
            ErrorCategory::NonRetryable {
                is_permission_error: true,
                ..
            }
        ));
        assert!(!category.is_retryable());
    }

    #[test]
    fn categorizes_validation_as_non_retryable() {
        let category = categorize_error_string("ValidationException: Invalid parameter");
        assert!(matches!(
            category,
            ErrorCategory::NonRetryable {
                is_permission_error: false,
                ..
            }
        ));
        assert!(!category.is_retryable());
    }

    #[test]
    fn extracts_error_codes() {
        assert_eq!(
            extract_error_code("ThrottlingException: Rate exceeded"),
            Some("ThrottlingException".to_string())
        );
        assert_eq!(
            extract_error_code("code: \"ValidationException\""),
            Some("ValidationException".to_string())
        );
    }
}
