// rest/mod.rs — Public REST API server.
//
// Axum HTTP server, local only by default. Every JSON endpoint wraps its
// payload in the ApiResponse envelope the HR frontend expects.
//
// Endpoints:
//   POST /api/v1/offers/generate
//   GET  /api/v1/offers/history
//   GET  /api/v1/offers/{id}
//   GET  /api/v1/offers/{id}/preview
//   POST /api/v1/esign/send
//   GET  /api/v1/esign/status/{envelope_id}
//   GET  /api/v1/esign/envelope/{envelope_id}
//   POST /api/v1/esign/webhook
//   GET  /api/v1/health
//   GET  /documents/*  (static generated documents)

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::info;

use crate::AppContext;

/// Response envelope shared by every JSON endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            data: None,
            errors: Vec::new(),
        }
    }

    pub fn error_with(message: &str, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            data: None,
            errors,
        }
    }
}

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("REST API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let documents_dir = ctx.config.documents_dir();
    Router::new()
        // Health
        .route("/api/v1/health", get(routes::health::health))
        // Offers
        .route(
            "/api/v1/offers/generate",
            post(routes::offers::generate_offer),
        )
        .route("/api/v1/offers/history", get(routes::offers::offer_history))
        .route("/api/v1/offers/{id}", get(routes::offers::get_offer))
        .route(
            "/api/v1/offers/{id}/preview",
            get(routes::offers::get_preview),
        )
        // E-signature
        .route("/api/v1/esign/send", post(routes::esign::send_for_signature))
        .route(
            "/api/v1/esign/status/{envelope_id}",
            get(routes::esign::signing_status),
        )
        .route(
            "/api/v1/esign/envelope/{envelope_id}",
            get(routes::esign::envelope_details),
        )
        .route("/api/v1/esign/webhook", post(routes::esign::webhook))
        // Generated document previews
        .nest_service("/documents", ServeDir::new(documents_dir))
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
