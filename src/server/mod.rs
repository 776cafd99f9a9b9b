pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::{Config, ServerConfig},
    judgment::Judge,
    llm::GeminiClient,
};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub use handlers::AppState;

pub fn router(state: AppState, server: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/get-judgment", post(handlers::get_judgment))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if server.cors.enabled {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

pub async fn run(config: Config) -> Result<()> {
    if config.llm.api_key.is_none() {
        warn!("API_KEY is not set; judgment requests will fail until it is configured");
    }

    let llm = GeminiClient::new(config.llm.clone());
    let app_state = AppState {
        judge: Arc::new(Judge::new(Arc::new(llm))),
    };

    let app = router(app_state, &config.server);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
