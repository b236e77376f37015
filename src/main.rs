//! RivalScope server binary.
//!
//! Bootstraps configuration, tracing, the database pool, and the REST
//! API router, then serves until shutdown.

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use rivalscope::adapters::http::{
    api_router, ComparisonHandlers, CompetitorHandlers, GoalHandlers, OnboardingHandlers,
    TeamMemberHandlers, WizardRegistry,
};
use rivalscope::adapters::postgres::{
    PostgresComparisonRepository, PostgresCompetitorRepository, PostgresGoalRepository,
    PostgresTeamMemberRepository,
};
use rivalscope::adapters::webhook::{WebhookClientConfig, WebhookSubmissionClient};
use rivalscope::application::services::{
    ComparisonService, CompetitorService, GoalService, TeamMemberService,
};
use rivalscope::application::{ResourceCache, SubmitOnboarding};
use rivalscope::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "Starting RivalScope"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    let cache = Arc::new(ResourceCache::new());

    let goal_service = Arc::new(GoalService::new(
        Arc::new(PostgresGoalRepository::new(pool.clone())),
        cache.clone(),
    ));
    let competitor_service = Arc::new(CompetitorService::new(
        Arc::new(PostgresCompetitorRepository::new(pool.clone())),
        cache.clone(),
    ));
    let team_member_service = Arc::new(TeamMemberService::new(
        Arc::new(PostgresTeamMemberRepository::new(pool.clone())),
        cache.clone(),
    ));
    let comparison_service = Arc::new(ComparisonService::new(
        Arc::new(PostgresComparisonRepository::new(pool.clone())),
        cache,
    ));

    let webhook_client = WebhookSubmissionClient::new(
        WebhookClientConfig::new(&config.webhook.url).with_timeout(config.webhook.timeout()),
    )?;
    let submit = Arc::new(SubmitOnboarding::new(Arc::new(webhook_client)));
    let registry = Arc::new(WizardRegistry::new());

    let cors = if config.server.cors_origins_list().is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|origin| origin.parse::<HeaderValue>().ok())
            .collect();
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    };

    let app = api_router(
        GoalHandlers::new(goal_service),
        CompetitorHandlers::new(competitor_service),
        TeamMemberHandlers::new(team_member_service),
        ComparisonHandlers::new(comparison_service),
        OnboardingHandlers::new(registry, submit),
    )
    .layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(cors),
    );

    let listener = tokio::net::TcpListener::bind(config.server.socket_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
