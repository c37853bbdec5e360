use anyhow::Context;
use atlas::{
    AppState, Config, InMemorySessionStore, OpenRouterClient, ResearchCoordinator, ToolRegistry,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env().context("failed to load configuration")?);

    let llm = Arc::new(OpenRouterClient::new(&config.llm));
    let registry = Arc::new(ToolRegistry::with_default_tools(config.search.clone()));
    let store = Arc::new(InMemorySessionStore::new());
    let coordinator = Arc::new(ResearchCoordinator::new(llm, registry, store));

    let state = AppState {
        config: config.clone(),
        coordinator,
    };

    let app = atlas::api::routes::create_router()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!(addr = %addr, model = %config.llm.model, "starting atlas-server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
