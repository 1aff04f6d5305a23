use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rollcall_web::config::ServerConfig;
use rollcall_web::router::build_app_router;
use rollcall_web::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rollcall_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = if config.database_tls_insecure {
        tracing::warn!("Database TLS certificate verification disabled by configuration");
        rollcall_db::create_pool_insecure_tls(&database_url).await
    } else {
        rollcall_db::create_pool(&database_url).await
    }
    .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    rollcall_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    if config.reset_schema_on_startup {
        rollcall_db::reset_schema(&pool)
            .await
            .expect("Failed to reset database schema");
        tracing::info!("Database schema reset (all previous rows dropped)");
    } else {
        rollcall_db::run_migrations(&pool)
            .await
            .expect("Failed to run database migrations");
        tracing::info!("Database migrations applied");
    }

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(config.host.parse().expect("Invalid HOST"), config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
