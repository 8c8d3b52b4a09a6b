use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use serde::Deserialize;

use entity::sea_orm_active_enums::AdminRole;

use crate::server::{
    config::GOOGLE_USERINFO_URL,
    data::{activity_log::ActivityLogRepository, admin_user::AdminUserRepository},
    error::{auth::AuthError, AppError},
    model::admin_user::CreateAdminUserParam,
    service::auth::GoogleAuthService,
};

/// Userinfo payload returned by Google's OpenID endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUser {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl<'a> GoogleAuthService<'a> {
    /// Completes the OAuth flow and binds the Google identity to an admin row.
    ///
    /// Exchanges the authorization code, fetches the account's email, and
    /// strictly checks it against the admin user table: unknown emails are
    /// rejected (no self-registration) and inactive accounts may not sign in.
    /// When `bootstrap_admin` is set (valid first-admin code), an unknown email
    /// is instead registered as an active Assistant Registrar.
    ///
    /// # Returns
    /// - `Ok(Model)` - The bound admin account
    /// - `Err(AuthError::TokenExchangeFailed)` - Code exchange with Google failed
    /// - `Err(AuthError::EmailNotRegistered)` - Email not in the admin table
    /// - `Err(AuthError::AccountInactive)` - Account was deactivated
    pub async fn callback(
        &self,
        authorization_code: String,
        bootstrap_admin: bool,
    ) -> Result<entity::admin_user::Model, AppError> {
        let admin_repo = AdminUserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let user = self.fetch_google_user(&token).await?;

        let admin = match admin_repo.find_by_email(&user.email).await? {
            Some(admin) if !admin.is_active => {
                return Err(AuthError::AccountInactive(admin.email).into())
            }
            Some(admin) => admin,
            None if bootstrap_admin => {
                tracing::info!("Bootstrapping first admin account for {}", user.email);
                admin_repo
                    .create(CreateAdminUserParam {
                        name: user.name.unwrap_or_else(|| user.email.clone()),
                        email: user.email,
                        role: AdminRole::AssistantRegistrar,
                        faculty: None,
                    })
                    .await?
            }
            None => return Err(AuthError::EmailNotRegistered(user.email).into()),
        };

        ActivityLogRepository::new(self.db)
            .log("Admin Login", admin.email.clone(), admin.name.clone())
            .await?;

        Ok(admin)
    }

    /// Retrieves the Google account's profile using the access token.
    async fn fetch_google_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<GoogleUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(GOOGLE_USERINFO_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<GoogleUser>()
            .await?;

        Ok(user_info)
    }
}
