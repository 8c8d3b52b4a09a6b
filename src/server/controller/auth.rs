use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::admin::AdminUserDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession, OAuthFlowSession},
        },
        service::auth::GoogleAuthService,
        state::AppState,
    },
};

/// Query parameters for the login endpoint.
#[derive(Deserialize)]
pub struct LoginParams {
    /// One-time first-admin setup code from the startup log.
    pub bootstrap_code: Option<String>,
}

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Google SSO for token exchange.
    pub code: String,
}

/// GET /api/auth/login - Redirect to the Google consent screen.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = GoogleAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    // Store CSRF token in session for verification during callback
    CsrfSession::new(&session).set_token(csrf_token.secret()).await?;

    if let Some(code) = params.bootstrap_code {
        OAuthFlowSession::new(&session).set_bootstrap_code(&code).await?;
    }

    Ok(Redirect::temporary(url.as_ref()))
}

/// GET /api/auth/callback - Complete the OAuth flow and bind the identity.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    if !CsrfSession::new(&session).validate(&params.state).await? {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    // A bootstrap code is only honored if it matches the one generated at
    // startup; otherwise the login proceeds as a normal identity check.
    let bootstrap_admin = match OAuthFlowSession::new(&session).take_bootstrap_code().await? {
        Some(code) => state.bootstrap_code_service.validate_and_consume(&code).await,
        None => false,
    };

    let auth_service = GoogleAuthService::new(&state.db, &state.http_client, &state.oauth_client);
    let admin = auth_service.callback(params.code, bootstrap_admin).await?;

    AuthSession::new(&session).set_admin_id(admin.id).await?;

    Ok(Redirect::temporary(&format!("{}/admin", state.frontend_url)))
}

/// GET /api/auth/logout - Clear the session.
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::temporary(&state.frontend_url))
}

/// GET /api/auth/user - The signed-in admin's own account info.
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(AdminUserDto::from_entity(admin))))
}
