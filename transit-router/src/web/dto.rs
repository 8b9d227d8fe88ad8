//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::graph::{CityStations, Connection};
use crate::planner::{Criterion, Route};

/// Request to plan routes between two cities.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Origin city id
    pub origin: String,

    /// Destination city id
    pub destination: String,

    /// Ranking criterion: "time", "cost" or "transfers"
    pub criterion: Criterion,

    /// Start time in HH:MM format (defaults to the configured start)
    pub start_time: Option<String>,

    /// Maximum number of routes (defaults to the configured limit)
    pub limit: Option<usize>,
}

/// One edge of a planned route.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    /// "travel" or "transfer"
    pub kind: &'static str,

    /// Departure station id
    pub from: String,

    /// Arrival station id
    pub to: String,

    /// City of the departure station
    pub from_city: String,

    /// City of the arrival station
    pub to_city: String,

    /// Scheduled departure time (travel only)
    pub departure_time: Option<String>,

    /// Scheduled arrival time (travel only)
    pub arrival_time: Option<String>,

    /// Price of this edge
    pub cost: f64,

    /// Duration of this edge in minutes
    pub travel_time_mins: i64,

    /// Minutes waited before this edge
    pub waiting_time_mins: i64,
}

impl ConnectionResult {
    pub fn from_connection(connection: &Connection, waiting_time_mins: i64) -> Self {
        let departure = connection.departure();
        Self {
            kind: if connection.is_transfer() {
                "transfer"
            } else {
                "travel"
            },
            from: connection.source().id().to_string(),
            to: connection.destination().id().to_string(),
            from_city: connection.source().city().to_string(),
            to_city: connection.destination().city().to_string(),
            departure_time: departure.map(|d| d.departure_time.to_string()),
            arrival_time: departure.map(|d| d.arrival_time.to_string()),
            cost: connection.cost(),
            travel_time_mins: connection.travel_time(),
            waiting_time_mins,
        }
    }
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Route edges in travel order
    pub connections: Vec<ConnectionResult>,

    /// Total price
    pub total_cost: f64,

    /// Total travel plus waiting time in minutes
    pub total_time_mins: i64,

    /// Number of transfers
    pub transfers: u32,

    /// Human-readable itinerary
    pub itinerary: String,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        let connections = route
            .connections()
            .iter()
            .zip(route.waiting_times())
            .map(|(conn, &waiting)| ConnectionResult::from_connection(conn, waiting))
            .collect();

        Self {
            connections,
            total_cost: route.total_cost(),
            total_time_mins: route.total_time(),
            transfers: route.transfers(),
            itinerary: route.to_string(),
        }
    }
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    pub origin: String,
    pub destination: String,
    pub criterion: Criterion,
    pub start_time: String,

    /// Routes ranked best-first
    pub routes: Vec<RouteResult>,
}

/// A city and its two stations.
#[derive(Debug, Serialize)]
pub struct CityResult {
    pub city: String,
    pub bus_station: String,
    pub train_station: String,
}

impl CityResult {
    pub fn from_city(city: &CityStations) -> Self {
        Self {
            city: city.city.to_string(),
            bus_station: city.bus.id().to_string(),
            train_station: city.train.id().to_string(),
        }
    }
}

/// Response listing all cities.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<CityResult>,
}

/// Graph size summary.
#[derive(Debug, Serialize)]
pub struct GraphStatsResponse {
    pub cities: usize,
    pub stations: usize,
    pub connections: usize,
    /// Approximate; the cache settles evictions lazily.
    pub cached_queries: u64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
