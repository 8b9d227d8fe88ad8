//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, warn};

use crate::domain::{CityId, ClockTime};
use crate::planner::{PlanError, Planner};

use super::dto::*;
use super::state::AppState;

/// Upper bound on the number of routes a single request may ask for.
pub const MAX_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cities", get(list_cities))
        .route("/graph/stats", get(graph_stats))
        .route("/routes/plan", post(plan_routes))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all cities with their bus and train stations.
async fn list_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    let cities = state.registry.cities().map(CityResult::from_city).collect();
    Json(CitiesResponse { cities })
}

/// Graph size summary.
async fn graph_stats(State(state): State<AppState>) -> Json<GraphStatsResponse> {
    Json(GraphStatsResponse {
        cities: state.registry.len(),
        stations: state.graph.station_count(),
        connections: state.graph.connection_count(),
        cached_queries: state.cache.entry_count(),
    })
}

/// Plan the best routes between two cities.
async fn plan_routes(
    State(state): State<AppState>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<Json<PlanRouteResponse>, AppError> {
    let origin = CityId::parse(&req.origin).map_err(|_| AppError::BadRequest {
        message: format!("Invalid origin city: {:?}", req.origin),
    })?;
    let destination = CityId::parse(&req.destination).map_err(|_| AppError::BadRequest {
        message: format!("Invalid destination city: {:?}", req.destination),
    })?;

    let start = match req.start_time.as_deref() {
        Some(s) => ClockTime::parse_hhmm(s).map_err(|e| AppError::BadRequest {
            message: format!("Invalid start time {s:?}: {e}"),
        })?,
        None => state.config.default_start(),
    };

    let limit = req.limit.unwrap_or(state.config.max_results).min(MAX_LIMIT);
    let criterion = req.criterion;

    let key = (origin.clone(), destination.clone(), criterion, start, limit);
    let routes = state
        .cache
        .get_or_try_insert(key, || {
            let graph = state.graph.clone();
            let registry = state.registry.clone();
            let (origin, destination) = (origin.clone(), destination.clone());
            async move {
                // The search is CPU-bound; keep it off the async workers.
                tokio::task::spawn_blocking(move || {
                    Planner::new(&graph, &registry).find_top_routes_for_cities(
                        &origin,
                        &destination,
                        criterion,
                        start,
                        limit,
                    )
                })
                .await
                .map_err(|e| AppError::Internal {
                    message: format!("Planner task failed: {e}"),
                })?
                .map_err(AppError::from)
            }
        })
        .await?;

    Ok(Json(PlanRouteResponse {
        origin: origin.to_string(),
        destination: destination.to_string(),
        criterion,
        start_time: start.to_string(),
        routes: routes.iter().map(RouteResult::from_route).collect(),
    }))
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use crate::dataset::TransportData;
    use crate::graph::build_graph;
    use crate::planner::{Criterion, PlannerConfig};

    const DATA: &str = r#"{
        "stations": [
            {"city": "G_0_0", "busStation": "A_0_0", "trainStation": "Z_0_0"},
            {"city": "G_0_1", "busStation": "A_0_1", "trainStation": "Z_0_1"},
            {"city": "G_1_1", "busStation": "A_1_1", "trainStation": "Z_1_1"}
        ],
        "departures": [
            {"type": "autobus", "from": "A_0_0", "to": "G_0_1",
             "departureTime": "08:10", "duration": 30, "price": 12, "minTransferTime": 5}
        ]
    }"#;

    fn state() -> AppState {
        let data = TransportData::from_json(DATA).unwrap();
        let registry = data.city_registry();
        let config = PlannerConfig::default();
        let graph = build_graph(&registry, &data.departures, &config.transfer_settings()).graph;
        AppState::new(graph, registry, config, &CacheConfig::default())
    }

    fn request(origin: &str, destination: &str, limit: Option<usize>) -> PlanRouteRequest {
        PlanRouteRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            criterion: Criterion::Time,
            start_time: Some("08:00".to_string()),
            limit,
        }
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn lists_cities_in_registration_order() {
        let Json(response) = list_cities(State(state())).await;

        let names: Vec<_> = response.cities.iter().map(|c| c.city.as_str()).collect();
        assert_eq!(names, vec!["G_0_0", "G_0_1", "G_1_1"]);
        assert_eq!(response.cities[0].bus_station, "A_0_0");
        assert_eq!(response.cities[0].train_station, "Z_0_0");
    }

    #[tokio::test]
    async fn reports_graph_stats() {
        let Json(stats) = graph_stats(State(state())).await;

        assert_eq!(stats.cities, 3);
        assert_eq!(stats.stations, 6);
        // Two transfer edges per city plus one trip.
        assert_eq!(stats.connections, 7);
        assert_eq!(stats.cached_queries, 0);
    }

    #[tokio::test]
    async fn plans_routes() {
        let Json(response) = plan_routes(State(state()), Json(request("G_0_0", "G_0_1", Some(3))))
            .await
            .unwrap();

        assert_eq!(response.start_time, "08:00");
        let times: Vec<_> = response.routes.iter().map(|r| r.total_time_mins).collect();
        assert_eq!(times, vec![45, 55, 65]);
    }

    #[tokio::test]
    async fn repeated_requests_hit_the_cache() {
        let state = state();

        for _ in 0..2 {
            plan_routes(State(state.clone()), Json(request("G_0_0", "G_0_1", Some(2))))
                .await
                .unwrap();
        }
        let key = (
            CityId::parse("G_0_0").unwrap(),
            CityId::parse("G_0_1").unwrap(),
            Criterion::Time,
            ClockTime::from_hm(8, 0).unwrap(),
            2,
        );
        let cached = state.cache.get(&key).await.unwrap();
        assert_eq!(cached.len(), 2);
    }

    #[tokio::test]
    async fn default_start_and_limit() {
        let mut req = request("G_0_0", "G_0_1", None);
        req.start_time = None;

        let Json(response) = plan_routes(State(state()), Json(req)).await.unwrap();

        assert_eq!(response.start_time, "08:00");
        assert!(response.routes.len() <= PlannerConfig::default().max_results);
    }

    #[tokio::test]
    async fn disconnected_cities_return_no_routes() {
        let Json(response) = plan_routes(State(state()), Json(request("G_0_0", "G_1_1", Some(3))))
            .await
            .unwrap();

        assert!(response.routes.is_empty());
    }

    #[tokio::test]
    async fn unknown_city_is_not_found() {
        let err = plan_routes(State(state()), Json(request("G_9_9", "G_0_1", None)))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn bad_start_time_is_rejected() {
        let mut req = request("G_0_0", "G_0_1", None);
        req.start_time = Some("8am".to_string());

        let err = plan_routes(State(state()), Json(req)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn blank_city_is_rejected() {
        let err = plan_routes(State(state()), Json(request("", "G_0_1", None)))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[test]
    fn router_builds() {
        let _router = create_router(state());
    }
}
