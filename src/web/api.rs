use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use ordered_float::OrderedFloat;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use crate::algorithm::{find_shortest_path, PathOutcome};
use crate::graph::{list_topology, Graph, Topology, UndirectedGraph};
use crate::web::models::*;
use crate::Error;

/// Graph type served over HTTP
pub type RoadGraph = UndirectedGraph<OrderedFloat<f64>>;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state.
///
/// Queries take the read lock, so any number of them run side by side; only a
/// writer replacing the graph would need exclusive access.
#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<RwLock<RoadGraph>>,
}

impl AppState {
    pub fn new(graph: RoadGraph) -> Self {
        Self {
            graph: Arc::new(RwLock::new(graph)),
        }
    }

    fn read_graph(&self) -> Result<RwLockReadGuard<'_, RoadGraph>, ApiError> {
        self.graph.read().map_err(|_| {
            log::error!("Graph lock poisoned");
            internal_error("graph is unavailable")
        })
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/find-path", post(find_path))
        .route("/api/graph", get(get_graph))
        .route("/api/health", get(health_check))
}

/// Find the shortest path between two nodes
pub async fn find_path(
    State(state): State<AppState>,
    payload: Result<Json<FindPathRequest>, JsonRejection>,
) -> Result<Json<FindPathResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        log::warn!("Rejected find-path body: {}", rejection);
        (
            StatusCode::BAD_REQUEST,
            Json(
                ErrorResponse::new("invalid_input", "Request body must be JSON with start and end.")
                    .with_details(serde_json::json!({ "reason": rejection.body_text() })),
            ),
        )
    })?;

    let (start, end) = match (request.start, request.end) {
        (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => (start, end),
        _ => {
            log::warn!("Rejected find-path request without start or end");
            return Err(invalid_input());
        }
    };

    let outcome = {
        let graph = state.read_graph()?;
        find_shortest_path(&*graph, &start, &end)
    };

    match outcome {
        Ok(PathOutcome::Found(result)) => Ok(Json(FindPathResponse {
            path: result.path,
            distance: result.distance.into_inner(),
        })),
        Ok(PathOutcome::NoPath) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("no_path", "No path found.")),
        )),
        Err(Error::InvalidInput(_)) => Err(invalid_input()),
        Err(err) => {
            log::error!("Path query {} -> {} failed: {}", start, end, err);
            Err(internal_error("Internal server error."))
        }
    }
}

/// Snapshot of the served graph
pub async fn get_graph(State(state): State<AppState>) -> Result<Json<Topology>, ApiError> {
    let graph = state.read_graph()?;
    Ok(Json(list_topology(&*graph)))
}

/// Health check endpoint
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let graph = state.read_graph()?;
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "nodes": graph.node_count(),
        "edges": graph.edge_count(),
    })))
}

fn invalid_input() -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("invalid_input", "Start and end nodes are required.")),
    )
}

fn internal_error(message: &str) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("internal_error", message)),
    )
}
