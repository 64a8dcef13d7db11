use axum::{
    http::{header, Method},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::graph::Graph;
use crate::web::api::{create_router, AppState};

/// Assemble the application router, with CORS when enabled
pub fn build_app(state: AppState, enable_cors: bool) -> Router {
    let app = Router::new().merge(create_router()).with_state(state);

    if !enable_cors {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    app.layer(ServiceBuilder::new().layer(cors).into_inner())
}

/// Start the web server with the given configuration
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let graph = config.load_graph()?;
    log::info!(
        "Serving graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let app = build_app(AppState::new(graph), config.enable_cors);

    let addr = config.socket_addr();
    log::info!("Route finder listening on http://{}", addr);
    log::info!("POST http://{}/api/find-path to query routes", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
