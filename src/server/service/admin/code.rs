//! Bootstrap code service for first-admin setup.
//!
//! When the application starts with no active admin accounts there is nobody
//! who could sign in (OAuth binding requires a pre-registered email). In that
//! case startup generates a one-time code and logs a setup link; the first
//! person to complete the Google login with that code is registered as an
//! active Assistant Registrar. Codes live in memory with a short TTL and are
//! invalidated after a single use.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for bootstrap codes in seconds.
const BOOTSTRAP_CODE_TTL_SECONDS: u64 = 15 * 60;

/// Stored bootstrap code with expiration timestamp.
#[derive(Clone)]
struct BootstrapCode {
    code: String,
    expires_at: Instant,
}

impl BootstrapCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + Duration::from_secs(BOOTSTRAP_CODE_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for managing the one-time first-admin bootstrap code.
///
/// The code is generated once on server startup if no active admin exists,
/// stored in memory with a 15-minute TTL, and invalidated after successful use
/// or expiration. This allows secure initial setup without pre-seeded
/// credentials.
#[derive(Clone)]
pub struct BootstrapCodeService {
    /// The currently active code, if any.
    code: Arc<RwLock<Option<BootstrapCode>>>,
}

impl BootstrapCodeService {
    pub fn new() -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a new random code and stores it, replacing any previous one.
    ///
    /// # Returns
    /// - `String` - The generated 32-character code
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        let code = BootstrapCode::new(code_string.clone());
        *self.code.write().await = Some(code);
        code_string
    }

    /// Validates the provided code and consumes it on success.
    ///
    /// Expired codes are cleaned up and fail validation. A matching code is
    /// invalidated so it cannot be used twice.
    ///
    /// # Returns
    /// - `true` - Code matched and was valid; it has been consumed
    /// - `false` - No code stored, code expired, or input did not match
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }

            if stored_code.matches(input_code) {
                *code = None;
                return true;
            }
        }

        false
    }

    /// Generates a 32-character alphanumeric code from the system RNG.
    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const CODE_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Checks if a valid, non-expired code is currently stored.
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A generated code validates exactly once.
    #[tokio::test]
    async fn code_is_single_use() {
        let service = BootstrapCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.validate_and_consume(&code).await);
    }

    /// A wrong code fails and leaves the stored code intact.
    #[tokio::test]
    async fn wrong_code_is_rejected() {
        let service = BootstrapCodeService::new();
        let _code = service.generate().await;

        assert!(!service.validate_and_consume("not-the-code").await);
        assert!(service.has_valid_code().await);
    }

    /// Generating again replaces the previous code.
    #[tokio::test]
    async fn regeneration_replaces_code() {
        let service = BootstrapCodeService::new();
        let first = service.generate().await;
        let second = service.generate().await;

        assert!(!service.validate_and_consume(&first).await);
        assert!(service.validate_and_consume(&second).await);
    }

    /// Validation with no code stored fails.
    #[tokio::test]
    async fn no_code_fails_validation() {
        let service = BootstrapCodeService::new();

        assert!(!service.validate_and_consume("anything").await);
    }
}
