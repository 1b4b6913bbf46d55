use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::error::ChefsMenuError;

const DEMO_EMAIL: &str = "chef@example.com";
const DEMO_PASSWORD: &str = "Password123";

/// Return true if `email` looks like `local@domain.tld`.
pub fn validate_email(email: &str) -> bool {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
    RE.is_match(email)
}

/// Checks submitted credentials against the one built-in account.
pub struct CredentialGate {
    delay: Duration,
}

impl CredentialGate {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Shape checks run first and return immediately; the credential
    /// comparison happens after the simulated latency.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<(), ChefsMenuError> {
        if email.is_empty() || password.is_empty() {
            return Err(ChefsMenuError::Validation(
                "Please fill in all fields".to_string(),
            ));
        }
        if !validate_email(email) {
            return Err(ChefsMenuError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }

        tokio::time::sleep(self.delay).await;

        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            info!("Login succeeded for {}", email);
            Ok(())
        } else {
            warn!("Login failed for {}", email);
            Err(ChefsMenuError::Auth("Invalid email or password".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("chef@example.com"));
        assert!(validate_email("a.b@c.co.za"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("chef@example"));
        assert!(!validate_email("chef @example.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email(""));
    }

    #[tokio::test(start_paused = true)]
    async fn test_valid_credentials_succeed_after_delay() {
        let gate = CredentialGate::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        gate.authenticate("chef@example.com", "Password123").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_password_is_auth_error() {
        let gate = CredentialGate::new(Duration::from_millis(1500));
        let err = gate.authenticate("chef@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, ChefsMenuError::Auth(_)));
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_email_rejected_before_comparison() {
        let gate = CredentialGate::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        let err = gate.authenticate("not-an-email", "x").await.unwrap_err();
        assert!(matches!(err, ChefsMenuError::Validation(_)));
        assert!(started.elapsed() < Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_fields_rejected() {
        let gate = CredentialGate::new(Duration::from_millis(1500));
        let err = gate.authenticate("", "Password123").await.unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields");
    }
}
