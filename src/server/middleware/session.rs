//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user
//! sessions, organized by concern. Each struct handles a specific domain of session
//! data, preventing typos, ensuring type consistency, and centralizing session-related
//! logic.
//!
//! # Architecture
//!
//! Session management is split into focused concerns:
//! - `AuthSession` - Admin authentication state (admin user id)
//! - `CsrfSession` - CSRF token management for the OAuth flow
//! - `OAuthFlowSession` - Temporary OAuth flow state (bootstrap codes)
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_ADMIN_ID: &str = "auth:admin";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_AUTH_BOOTSTRAP_CODE: &str = "auth:bootstrap_code";

/// Authentication session management.
///
/// Handles the signed-in admin's identity: storing and retrieving the admin
/// user id and clearing the session on logout.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the admin user's id in the session.
    ///
    /// Called after a successful OAuth callback to establish a logged-in session.
    pub async fn set_admin_id(&self, admin_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_ADMIN_ID, admin_id).await?;
        Ok(())
    }

    /// Retrieves the signed-in admin's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(admin_id))` - Admin is logged in
    /// - `Ok(None)` - No admin in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_admin_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_ADMIN_ID).await?)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove authentication state and any temporary
    /// OAuth flow data.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for the OAuth flow. Tokens are
/// stored during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the CSRF token generated when building the login URL.
    pub async fn set_token(&self, token: &str) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Validates a callback state value against the stored token.
    ///
    /// The token is removed from the session regardless of outcome, so a state
    /// value can only be checked once.
    ///
    /// # Returns
    /// - `Ok(true)` - State matches the stored token
    /// - `Ok(false)` - No token stored or state does not match
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn validate(&self, state: &str) -> Result<bool, AppError> {
        let stored: Option<String> = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;

        Ok(stored.is_some_and(|token| token == state))
    }
}

/// Temporary OAuth flow state.
///
/// Carries the bootstrap code from the login request to the callback, where it
/// is validated against the in-memory code service.
pub struct OAuthFlowSession<'a> {
    session: &'a Session,
}

impl<'a> OAuthFlowSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_bootstrap_code(&self, code: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_BOOTSTRAP_CODE, code)
            .await?;
        Ok(())
    }

    /// Takes the bootstrap code out of the session, if one was provided at
    /// login.
    pub async fn take_bootstrap_code(&self) -> Result<Option<String>, AppError> {
        Ok(self
            .session
            .remove::<String>(SESSION_AUTH_BOOTSTRAP_CODE)
            .await?)
    }
}
