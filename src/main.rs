// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::application::card_service::CardService;
use crate::application::value_store::ComponentValueStore;
use crate::infrastructure::config::{load_cards_config, load_service_config};
use crate::infrastructure::memory_store::MemoryValueStore;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    create_card, create_preset_card, get_component_value, health_check, list_cards,
    report_component_value,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let service_config = load_service_config()?;
    let cards_config = load_cards_config()?;

    // Create the value store (infrastructure layer)
    let value_store: Arc<dyn ComponentValueStore> = Arc::new(MemoryValueStore::new());

    // Create services (application layer)
    let card_service = CardService::new(cards_config);

    // Create application state
    let state = Arc::new(AppState {
        card_service,
        value_store,
    });

    // Build router (presentation layer)
    // Note: Compression is negotiated per request by the layer, so the
    // handlers stay plain JSON
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/cards", get(list_cards).post(create_card))
        .route("/cards/:key", post(create_preset_card))
        .route(
            "/cards/:key/value",
            get(get_component_value).post(report_component_value),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = service_config.server.listen.parse()?;
    println!("Starting kpi-cards service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
