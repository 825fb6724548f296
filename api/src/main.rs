//! TabDesk API Server
//!
//! Onboards bars and restaurants, lists their order tickets and manages the
//! product category catalogue.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    DiskStorageProvider, HmacTokenIssuer, PostgresBusinessRepository,
    PostgresCategoryProductRepository, PostgresCommandRepository,
};
use app::{BusinessOnboardingService, CategoryService, CommandListingService, SessionService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub onboarding_service: Arc<
        BusinessOnboardingService<PostgresBusinessRepository, HmacTokenIssuer, DiskStorageProvider>,
    >,
    pub command_service:
        Arc<CommandListingService<PostgresBusinessRepository, PostgresCommandRepository>>,
    pub category_service: Arc<CategoryService<PostgresCategoryProductRepository>>,
    pub session_service: Arc<SessionService<HmacTokenIssuer>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tabdesk_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TabDesk API...");

    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Create adapters
    let business_repo = Arc::new(PostgresBusinessRepository::new(db.clone()));
    let command_repo = Arc::new(PostgresCommandRepository::new(db.clone()));
    let category_repo = Arc::new(PostgresCategoryProductRepository::new(db.clone()));
    let storage = Arc::new(DiskStorageProvider::new(
        config.tmp_dir.clone(),
        config.uploads_dir.clone(),
    ));
    let tokens = Arc::new(HmacTokenIssuer::new(
        config.token_secret.clone(),
        config.token_ttl_secs,
    ));

    // Create application services
    let onboarding_service = Arc::new(BusinessOnboardingService::new(
        business_repo.clone(),
        tokens.clone(),
        storage,
    ));
    let command_service = Arc::new(CommandListingService::new(business_repo, command_repo));
    let category_service = Arc::new(CategoryService::new(category_repo));
    let session_service = Arc::new(SessionService::new(tokens.clone()));

    let state = AppState {
        onboarding_service,
        command_service,
        category_service,
        session_service,
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // PeerIpKeyExtractor keys on the socket address, no proxy headers needed
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("Failed to build governor config")?,
    );

    // Session bootstrap is public; onboarding needs a session token
    let public_rate_limited_routes = Router::new()
        .route("/sessions", post(handlers::create_session))
        .layer(GovernorLayer {
            config: governor_config.clone(),
        });

    let onboarding_routes = Router::new()
        .route("/business", post(handlers::create_business))
        .layer(GovernorLayer {
            config: governor_config,
        });

    let protected_routes = Router::new()
        .route("/business/:id/commands", get(handlers::list_commands))
        .route(
            "/categories",
            post(handlers::create_categories).get(handlers::search_categories),
        )
        .merge(onboarding_routes)
        .layer(middleware::from_fn_with_state(
            tokens,
            auth::auth_middleware,
        ));

    // Build router
    let app = Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        .merge(public_rate_limited_routes)
        .merge(protected_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
