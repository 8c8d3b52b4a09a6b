use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UNIVERSITY_EMAIL_DOMAIN: &str = "pdn.ac.lk";

pub struct Config {
    pub database_url: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,

    pub google_auth_url: String,
    pub google_token_url: String,

    /// Base URL this backend is reachable at; used in the bootstrap login link.
    pub app_url: String,
    /// Frontend origin; CORS allow-origin and post-login redirect target.
    pub frontend_url: String,
    pub listen_addr: String,
    /// Domain student email addresses must belong to.
    pub university_email_domain: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            google_client_id: require("GOOGLE_CLIENT_ID")?,
            google_client_secret: require("GOOGLE_CLIENT_SECRET")?,
            google_redirect_url: require("GOOGLE_REDIRECT_URL")?,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            app_url: require("APP_URL")?,
            frontend_url: require("FRONTEND_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            university_email_domain: std::env::var("UNIVERSITY_EMAIL_DOMAIN")
                .unwrap_or_else(|_| DEFAULT_UNIVERSITY_EMAIL_DOMAIN.to_string()),
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
