//! Graph construction from timetable records.

use tracing::{debug, warn};

use crate::dataset::DepartureRecord;
use crate::domain::{
    CityId, ClockTime, Departure, DomainError, MINUTES_PER_DAY, StationId, StationKind,
};

use super::{CityRegistry, TransitGraph};

/// Flat cost and duration of the synthetic bus/train transfer edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferSettings {
    pub cost: f64,
    /// Minutes.
    pub time_mins: i64,
}

impl TransferSettings {
    /// Replace negative or non-finite values with the defaults.
    ///
    /// A negative transfer cost or duration would make the bus/train pair of
    /// a city a negative cycle, which the search cannot rank.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut settings = self;

        if !settings.cost.is_finite() || settings.cost < 0.0 {
            warn!(cost = settings.cost, "invalid transfer cost, using default");
            settings.cost = defaults.cost;
        }
        if settings.time_mins < 0 {
            warn!(time_mins = settings.time_mins, "negative transfer time, using default");
            settings.time_mins = defaults.time_mins;
        } else if settings.time_mins == 0 {
            warn!("transfer time is zero, transfers are charged the default wait");
        }

        settings
    }
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            cost: 5.0,
            time_mins: 10,
        }
    }
}

/// Why a departure record was left out of the graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error("unknown source station {0}")]
    UnknownSource(String),

    #[error("unknown destination city {0}")]
    UnknownDestination(String),

    #[error("{field} {value} is out of range")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("invalid price {0}")]
    InvalidPrice(f64),
}

/// Result of building a graph.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub graph: TransitGraph,
    /// Departure records that could not be resolved.
    pub skipped: usize,
}

/// Build the transit graph.
///
/// Every registered city contributes its two stations and a transfer edge in
/// each direction between them. Each departure record becomes a travel edge
/// from its source station to the same-mode station of its destination city.
/// Records that fail to resolve are logged and skipped. Invalid transfer
/// settings fall back to [`TransferSettings::default`].
pub fn build_graph(
    registry: &CityRegistry,
    departures: &[DepartureRecord],
    transfers: &TransferSettings,
) -> BuildReport {
    let transfers = transfers.sanitized();
    let mut graph = TransitGraph::new();

    for city in registry.cities() {
        graph.add_station(city.bus.clone());
        graph.add_station(city.train.clone());
        graph.add_transfer_edge(&city.bus, &city.train, transfers.cost, transfers.time_mins);
        graph.add_transfer_edge(&city.train, &city.bus, transfers.cost, transfers.time_mins);
    }

    let mut skipped = 0;
    for record in departures {
        match resolve_departure(registry, record) {
            Ok(departure) => {
                if departure.min_waiting_time <= 0 {
                    warn!(
                        from = %departure.source.id(),
                        at = %departure.departure_time,
                        min_wait = departure.min_waiting_time,
                        "departure has no positive minimum wait, default applies"
                    );
                }
                graph.add_connection(departure);
            }
            Err(reason) => {
                warn!(
                    mode = %record.mode,
                    from = %record.from,
                    to = %record.to,
                    %reason,
                    "skipping departure"
                );
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, "skipped invalid departure records");
    }
    debug!(
        stations = graph.station_count(),
        connections = graph.connection_count(),
        "graph built"
    );

    BuildReport { graph, skipped }
}

/// Resolve a departure record against the registry.
fn resolve_departure(
    registry: &CityRegistry,
    record: &DepartureRecord,
) -> Result<Departure, SkipReason> {
    let kind = StationKind::parse(&record.mode)?;

    let source = StationId::parse(&record.from)
        .ok()
        .and_then(|id| registry.station(&id))
        .ok_or_else(|| SkipReason::UnknownSource(record.from.clone()))?;

    let destination = CityId::parse(&record.to)
        .ok()
        .and_then(|city| registry.station_for(&city, kind))
        .ok_or_else(|| SkipReason::UnknownDestination(record.to.clone()))?;

    let departure_time =
        ClockTime::parse_hhmm(&record.departure_time).map_err(DomainError::from)?;

    if !(0..=MINUTES_PER_DAY).contains(&record.duration) {
        return Err(SkipReason::OutOfRange {
            field: "duration",
            value: record.duration,
        });
    }
    // Non-positive waits are replaced by the default during search.
    if record.min_transfer_time > MINUTES_PER_DAY {
        return Err(SkipReason::OutOfRange {
            field: "minTransferTime",
            value: record.min_transfer_time,
        });
    }
    if !record.price.is_finite() || record.price < 0.0 {
        return Err(SkipReason::InvalidPrice(record.price));
    }

    Ok(Departure::with_duration(
        source.clone(),
        destination.clone(),
        departure_time,
        record.duration,
        record.price,
        record.min_transfer_time,
    ))
}
