//! City-to-city planning.
//!
//! Every city has a bus and a train station, so a city query runs the station
//! search for all four origin/destination pairs and ranks the union.

use tracing::debug;

use crate::domain::{CityId, ClockTime, StationId, StationKind};
use crate::graph::{CityRegistry, TransitGraph};

use super::Criterion;
use super::rank::rank_routes;
use super::route::Route;
use super::search::find_top_routes;

/// Error from a city-level query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("unknown origin city {0}")]
    UnknownOrigin(CityId),

    #[error("unknown destination city {0}")]
    UnknownDestination(CityId),
}

/// Route planner over a shared graph and city registry.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    graph: &'a TransitGraph,
    registry: &'a CityRegistry,
}

impl<'a> Planner<'a> {
    pub fn new(graph: &'a TransitGraph, registry: &'a CityRegistry) -> Self {
        Self { graph, registry }
    }

    /// Find up to `k` routes between two cities, best first by `criterion`.
    ///
    /// No connecting route is an empty result; only an unregistered city is
    /// an error.
    pub fn find_top_routes_for_cities(
        &self,
        origin: &CityId,
        destination: &CityId,
        criterion: Criterion,
        start: ClockTime,
        k: usize,
    ) -> Result<Vec<Route>, PlanError> {
        let from = self
            .registry
            .get(origin)
            .ok_or_else(|| PlanError::UnknownOrigin(origin.clone()))?;
        let to = self
            .registry
            .get(destination)
            .ok_or_else(|| PlanError::UnknownDestination(destination.clone()))?;

        let mut routes = Vec::new();
        for source_kind in [StationKind::Bus, StationKind::Train] {
            for dest_kind in [StationKind::Bus, StationKind::Train] {
                let source = from.station(source_kind).id();
                let dest = to.station(dest_kind).id();
                routes.extend(find_top_routes(
                    self.graph,
                    source,
                    dest,
                    criterion,
                    start,
                    k,
                ));
            }
        }

        let found = routes.len();
        let ranked = rank_routes(routes, criterion, k);
        debug!(
            %origin,
            %destination,
            %criterion,
            found,
            returned = ranked.len(),
            "city query complete"
        );

        Ok(ranked)
    }

    /// Station-to-station search; see [`find_top_routes`].
    pub fn find_top_routes(
        &self,
        source: &StationId,
        destination: &StationId,
        criterion: Criterion,
        start: ClockTime,
        k: usize,
    ) -> Vec<Route> {
        find_top_routes(self.graph, source, destination, criterion, start, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DepartureRecord;
    use crate::graph::{BuildReport, CityRegistryBuilder, TransferSettings, build_graph};

    fn time(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    fn city(s: &str) -> CityId {
        CityId::parse(s).unwrap()
    }

    fn registry() -> CityRegistry {
        CityRegistryBuilder::new()
            .add("G_0_0", "A_0_0", "Z_0_0")
            .add("G_0_1", "A_0_1", "Z_0_1")
            .add("G_1_0", "A_1_0", "Z_1_0")
            .build()
    }

    fn departure(mode: &str, from: &str, to: &str, at: &str, duration: i64, price: f64) -> DepartureRecord {
        DepartureRecord {
            mode: mode.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            departure_time: at.to_string(),
            duration,
            price,
            min_transfer_time: 5,
        }
    }

    fn graph(departures: &[DepartureRecord]) -> (TransitGraph, CityRegistry) {
        let registry = registry();
        let BuildReport { graph, .. } =
            build_graph(&registry, departures, &TransferSettings::default());
        (graph, registry)
    }

    #[test]
    fn merges_all_station_pairs() {
        let (graph, registry) = graph(&[departure("autobus", "A_0_0", "G_0_1", "08:10", 30, 12.0)]);
        let planner = Planner::new(&graph, &registry);

        let routes = planner
            .find_top_routes_for_cities(&city("G_0_0"), &city("G_0_1"), Criterion::Time, time("08:00"), 3)
            .unwrap();

        let summary: Vec<_> = routes
            .iter()
            .map(|r| {
                (
                    r.total_time(),
                    r.origin().unwrap().id().to_string(),
                    r.destination().unwrap().id().to_string(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                (45, "A_0_0".to_string(), "A_0_1".to_string()),
                (55, "Z_0_0".to_string(), "A_0_1".to_string()),
                (65, "A_0_0".to_string(), "Z_0_1".to_string()),
            ]
        );
    }

    #[test]
    fn ranks_by_cost_across_modes() {
        let (graph, registry) = graph(&[
            departure("autobus", "A_0_0", "G_0_1", "08:10", 30, 40.0),
            departure("voz", "Z_0_0", "G_0_1", "09:00", 60, 15.0),
        ]);
        let planner = Planner::new(&graph, &registry);

        let routes = planner
            .find_top_routes_for_cities(&city("G_0_0"), &city("G_0_1"), Criterion::Cost, time("08:00"), 2)
            .unwrap();

        assert_eq!(routes.len(), 2);
        // Train from the train station, no transfers.
        assert_eq!(routes[0].total_cost(), 15.0);
        assert_eq!(routes[0].transfers(), 0);
        assert_eq!(routes[1].total_cost(), 15.0 + 5.0);
    }

    #[test]
    fn ranks_by_transfers() {
        let (graph, registry) = graph(&[departure("voz", "Z_0_0", "G_0_1", "08:30", 30, 20.0)]);
        let planner = Planner::new(&graph, &registry);

        let routes = planner
            .find_top_routes_for_cities(&city("G_0_0"), &city("G_0_1"), Criterion::Transfers, time("08:00"), 5)
            .unwrap();

        assert!(routes.len() <= 5);
        assert_eq!(routes[0].transfers(), 0);
        assert_eq!(routes[0].origin().unwrap().id().as_str(), "Z_0_0");
        for pair in routes.windows(2) {
            assert!(pair[0].transfers() <= pair[1].transfers());
        }
    }

    #[test]
    fn disconnected_cities_are_empty() {
        let (graph, registry) = graph(&[departure("autobus", "A_0_0", "G_0_1", "08:10", 30, 12.0)]);
        let planner = Planner::new(&graph, &registry);

        for criterion in Criterion::ALL {
            let routes = planner
                .find_top_routes_for_cities(&city("G_0_0"), &city("G_1_0"), criterion, time("08:00"), 3)
                .unwrap();
            assert!(routes.is_empty());
        }
    }

    #[test]
    fn unknown_cities_are_errors() {
        let (graph, registry) = graph(&[]);
        let planner = Planner::new(&graph, &registry);

        let err = planner
            .find_top_routes_for_cities(&city("G_9_9"), &city("G_0_1"), Criterion::Time, time("08:00"), 3)
            .unwrap_err();
        assert_eq!(err, PlanError::UnknownOrigin(city("G_9_9")));
        assert_eq!(err.to_string(), "unknown origin city G_9_9");

        let err = planner
            .find_top_routes_for_cities(&city("G_0_0"), &city("G_9_9"), Criterion::Time, time("08:00"), 3)
            .unwrap_err();
        assert_eq!(err, PlanError::UnknownDestination(city("G_9_9")));
    }

    #[test]
    fn zero_limit_is_empty() {
        let (graph, registry) = graph(&[departure("autobus", "A_0_0", "G_0_1", "08:10", 30, 12.0)]);
        let planner = Planner::new(&graph, &registry);

        let routes = planner
            .find_top_routes_for_cities(&city("G_0_0"), &city("G_0_1"), Criterion::Time, time("08:00"), 0)
            .unwrap();
        assert!(routes.is_empty());
    }
}
