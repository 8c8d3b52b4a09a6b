use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::admin_user::AdminUserRepository,
    error::{config::ConfigError, AppError},
    service::admin::code::BootstrapCodeService,
    state::OAuth2Client,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema is up-to-date before the
/// application accesses the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Sessions are stored in a dedicated table in the same SQLite database and
/// expire after seven days of inactivity.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the HTTP client used for Google API calls.
///
/// Redirects are disabled so token and userinfo requests can never be bounced
/// to an unexpected host.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}

/// Builds the OAuth2 client for the Google authorization-code flow.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

    let auth_url = AuthUrl::new(config.google_auth_url.clone()).map_err(|e| {
        ConfigError::InvalidUrl {
            name: "GOOGLE_AUTH_URL".to_string(),
            source: e,
        }
    })?;
    let token_url = TokenUrl::new(config.google_token_url.clone()).map_err(|e| {
        ConfigError::InvalidUrl {
            name: "GOOGLE_TOKEN_URL".to_string(),
            source: e,
        }
    })?;
    let redirect_url = RedirectUrl::new(config.google_redirect_url.clone()).map_err(|e| {
        ConfigError::InvalidUrl {
            name: "GOOGLE_REDIRECT_URL".to_string(),
            source: e,
        }
    })?;

    Ok(
        BasicClient::new(ClientId::new(config.google_client_id.clone()))
            .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
            .set_auth_uri(auth_url)
            .set_token_uri(token_url)
            .set_redirect_uri(redirect_url),
    )
}

/// Opens the first-admin bootstrap window when no active admin exists.
///
/// Without an active admin nobody can pass the OAuth identity check, so a
/// one-time code is generated and a setup link logged; completing the Google
/// login through that link registers the account as an active Assistant
/// Registrar.
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
    bootstrap_code_service: &BootstrapCodeService,
) -> Result<(), AppError> {
    let admin_repo = AdminUserRepository::new(db);

    if admin_repo.active_admin_exists().await? {
        return Ok(());
    }

    let code = bootstrap_code_service.generate().await;

    tracing::warn!(
        "No active admin accounts found. Complete first-admin setup within 15 minutes via: \
         {}/api/auth/login?bootstrap_code={}",
        config.app_url,
        code
    );

    Ok(())
}
