//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use super::service::admin::code::BootstrapCodeService;

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `BootstrapCodeService` uses `Arc` for shared state
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for external API requests (Google token and userinfo
    /// endpoints). Configured with redirects disabled.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Google authentication flow.
    pub oauth_client: OAuth2Client,

    /// Service holding the one-time first-admin bootstrap code.
    pub bootstrap_code_service: BootstrapCodeService,

    /// Frontend origin for post-login and logout redirects.
    pub frontend_url: String,

    /// Domain student email addresses must belong to; feeds the validators.
    pub university_email_domain: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized; the resulting state is provided to the Axum router.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        bootstrap_code_service: BootstrapCodeService,
        frontend_url: String,
        university_email_domain: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            bootstrap_code_service,
            frontend_url,
            university_email_domain,
        }
    }
}
