//! City lookup: which bus and train station serve each city.

use std::collections::HashMap;

use tracing::warn;

use crate::domain::{CityId, DomainError, Station, StationId, StationKind};

/// The pair of stations serving one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityStations {
    pub city: CityId,
    pub bus: Station,
    pub train: Station,
}

impl CityStations {
    /// Create the station pair for a city from raw identifiers.
    pub fn parse(city: &str, bus: &str, train: &str) -> Result<Self, DomainError> {
        let city = CityId::parse(city)?;
        let bus = Station::new(StationId::parse(bus)?, city.clone(), StationKind::Bus);
        let train = Station::new(StationId::parse(train)?, city.clone(), StationKind::Train);
        Ok(Self { city, bus, train })
    }

    /// The station of the given mode.
    pub fn station(&self, kind: StationKind) -> &Station {
        match kind {
            StationKind::Bus => &self.bus,
            StationKind::Train => &self.train,
        }
    }

    /// Both stations, bus first.
    pub fn stations(&self) -> [&Station; 2] {
        [&self.bus, &self.train]
    }
}

/// Immutable registry of cities and their stations.
///
/// Cities keep registration order.
#[derive(Debug, Clone, Default)]
pub struct CityRegistry {
    cities: Vec<CityStations>,
    by_city: HashMap<CityId, usize>,
    by_station: HashMap<StationId, Station>,
}

impl CityRegistry {
    /// Look up the stations of a city.
    pub fn get(&self, city: &CityId) -> Option<&CityStations> {
        self.by_city.get(city).map(|&idx| &self.cities[idx])
    }

    /// Resolve the station of a given mode in a city.
    pub fn station_for(&self, city: &CityId, kind: StationKind) -> Option<&Station> {
        self.get(city).map(|stations| stations.station(kind))
    }

    /// Look up any registered station by id.
    pub fn station(&self, id: &StationId) -> Option<&Station> {
        self.by_station.get(id)
    }

    /// All cities, in registration order.
    pub fn cities(&self) -> impl Iterator<Item = &CityStations> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Builder for a [`CityRegistry`].
///
/// Invalid or duplicate entries are logged and skipped.
#[derive(Debug, Default)]
pub struct CityRegistryBuilder {
    inner: CityRegistry,
}

impl CityRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a city with its bus and train station ids.
    pub fn add(mut self, city: &str, bus: &str, train: &str) -> Self {
        match CityStations::parse(city, bus, train) {
            Ok(stations) => self.insert(stations),
            Err(e) => warn!(city, bus, train, error = %e, "skipping invalid city entry"),
        }
        self
    }

    fn insert(&mut self, stations: CityStations) {
        let registry = &mut self.inner;

        if registry.by_city.contains_key(&stations.city) {
            warn!(city = %stations.city, "skipping duplicate city entry");
            return;
        }
        if let Some(taken) = stations
            .stations()
            .into_iter()
            .find(|s| registry.by_station.contains_key(s.id()))
        {
            warn!(
                city = %stations.city,
                station = %taken.id(),
                "skipping city whose station is already registered"
            );
            return;
        }

        for station in stations.stations() {
            registry
                .by_station
                .insert(station.id().clone(), station.clone());
        }
        registry
            .by_city
            .insert(stations.city.clone(), registry.cities.len());
        registry.cities.push(stations);
    }

    pub fn build(self) -> CityRegistry {
        self.inner
    }
}
