use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// OAuth code-for-token exchange with the identity provider failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchangeFailed(String),

    /// The Google account's email is not present in the admin user table.
    ///
    /// Only pre-registered staff accounts may sign in; there is no
    /// self-registration.
    #[error("Email {0} is not registered as an admin")]
    EmailNotRegistered(String),

    /// The admin account exists but has been deactivated.
    #[error("Admin account {0} is inactive")]
    AccountInactive(String),

    /// No authenticated user id in the session.
    #[error("No user found in session")]
    UserNotInSession,

    /// The session references an admin id that no longer exists.
    #[error("Admin {0} in session but not in database")]
    UserNotInDatabase(i32),

    /// The authenticated admin lacks the required role for the operation.
    #[error("Admin {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the precise cause is logged server-side.
///
/// # Returns
/// - 400 Bad Request - CSRF failures
/// - 401 Unauthorized - Unknown/inactive accounts, missing or stale sessions,
///   token exchange failures
/// - 403 Forbidden - Role-based access denials
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchangeFailed(reason) => {
                tracing::error!("OAuth token exchange failed: {}", reason);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::EmailNotRegistered(email) => {
                tracing::warn!("Rejected login for unregistered email {}", email);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "This email is not registered in the system.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccountInactive(email) => {
                tracing::warn!("Rejected login for inactive account {}", email);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "This account has been deactivated.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(admin_id, reason) => {
                tracing::warn!("Admin {} denied access: {}", admin_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to perform this action.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
