mod model;
mod server;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config, router::ApiDoc, scheduler::renewal_lapse,
    service::admin::code::BootstrapCodeService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "society_registry=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client();
    let oauth_client = startup::setup_oauth_client(&config)?;

    let bootstrap_code_service = BootstrapCodeService::new();

    tracing::info!("Starting server");

    // Open the first-admin bootstrap window if no active admin exists
    startup::check_for_admin(&db, &config, &bootstrap_code_service).await?;

    // Start the renewal-lapse scheduler
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = renewal_lapse::start_scheduler(scheduler_db).await {
            tracing::error!("Renewal lapse scheduler error: {}", e);
        }
    });

    let cors = CorsLayer::new()
        .allow_origin(config.frontend_url.parse::<HeaderValue>()?)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let state = AppState::new(
        db,
        http_client,
        oauth_client,
        bootstrap_code_service,
        config.frontend_url.clone(),
        config.university_email_domain.clone(),
    );

    let app = Router::new()
        .merge(server::router::router().with_state(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(session)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
