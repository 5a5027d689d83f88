//! Caller-supplied AWS credentials.
//!
//! Credentials live for the duration of one scan request. They are never
//! persisted, cached, or logged; the `Debug` impl redacts the secret.

use crate::app::errors::ValidationError;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_types::region::Region;

/// Access key, secret key, and optional session token from the request form.
#[derive(Clone)]
pub struct ScanCredentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl ScanCredentials {
    /// Build credentials from raw form input. An empty session token is
    /// treated as absent.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        let session_token = session_token.filter(|token| !token.trim().is_empty());
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }

    /// Both the access key id and the secret must be non-empty before a scan
    /// may begin.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.access_key_id.trim().is_empty() || self.secret_access_key.trim().is_empty() {
            return Err(ValidationError(
                "Please provide both AWS Access Key and Secret Key.".to_string(),
            ));
        }
        Ok(())
    }

    /// Assemble an SDK config for one region with these credentials as a
    /// static provider.
    pub async fn sdk_config(&self, region: &str) -> aws_config::SdkConfig {
        let credentials = Credentials::from_keys(
            self.access_key_id.clone(),
            self.secret_access_key.clone(),
            self.session_token.clone(),
        );
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(credentials)
            .load()
            .await
    }
}

impl std::fmt::Debug for ScanCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_credentials_pass_validation() {
        let credentials = ScanCredentials::new("AKIAEXAMPLE", "secret", None);
        assert!(credentials.validate().is_ok());
    }

    #[test]
    fn empty_access_key_is_rejected() {
        let credentials = ScanCredentials::new("", "secret", None);
        assert!(credentials.validate().is_err());
    }

    #[test]
    fn whitespace_secret_is_rejected() {
        let credentials = ScanCredentials::new("AKIAEXAMPLE", "   ", None);
        assert!(credentials.validate().is_err());
    }

    #[test]
    fn empty_session_token_is_treated_as_absent() {
        let credentials = ScanCredentials::new("AKIAEXAMPLE", "secret", Some(String::new()));
        assert!(credentials.session_token.is_none());
        assert!(credentials.validate().is_ok());
    }

    #[test]
    fn debug_output_redacts_the_secret() {
        let credentials = ScanCredentials::new("AKIAEXAMPLE", "hunter2", Some("tok123".to_string()));
        let rendered = format!("{:?}", credentials);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("tok123"));
    }
}
