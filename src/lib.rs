pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use config::Config;
use services::Database;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Config,
}

/// Health check endpoint for liveness probes.
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "fee-ledger-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Prometheus metrics endpoint.
async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        services::get_metrics(),
    )
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    state: AppState,
}

impl Application {
    /// Build the application: open the database, run migrations, wire the
    /// router, bind the listener (port 0 = random port for testing).
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        services::init_metrics();

        let db = Database::new(&config.database.url, config.database.max_connections).await?;
        db.run_migrations().await?;

        let state = AppState {
            db,
            config: config.clone(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/metrics", get(metrics_endpoint))
            .route(
                "/api/fees",
                post(handlers::fees::create_fee).get(handlers::fees::list_fees),
            )
            .route("/api/fees/summary", get(handlers::reports::fee_summary))
            .route(
                "/api/fees/recent-payments",
                get(handlers::reports::recent_payments),
            )
            .route(
                "/api/fees/:id",
                get(handlers::fees::get_fee)
                    .put(handlers::fees::update_fee)
                    .delete(handlers::fees::delete_fee),
            )
            .route("/api/fees/:id/pay", post(handlers::fees::pay_fee))
            .route(
                "/api/fees/:id/installments",
                get(handlers::installments::list_installments),
            )
            .route(
                "/api/fees/:id/installments/:installment_id/pay",
                post(handlers::installments::pay_installment),
            )
            .layer(CorsLayer::permissive())
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                }),
            )
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
        let listener = TcpListener::bind(addr).await?;
        let port = listener.local_addr()?.port();

        tracing::info!("Fee ledger service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get the application state for sharing with tests.
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}
