//! Transport data file model.
//!
//! The timetable generator writes a single JSON document holding the country
//! grid, the station pair of every city, and a flat list of departures. This
//! module reads that document; turning it into a graph is
//! [`crate::graph::build_graph`]'s job.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::{CityRegistry, CityRegistryBuilder};

/// Errors reading a transport data file.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid transport data document
    #[error("invalid transport data: {0}")]
    Json(#[from] serde_json::Error),
}

/// A city and its two stations, as written by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub city: String,
    pub bus_station: String,
    pub train_station: String,
}

/// A scheduled departure, as written by the generator.
///
/// `to` names the destination *city*; the departure's mode picks which of
/// that city's stations it arrives at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureRecord {
    #[serde(rename = "type")]
    pub mode: String,
    pub from: String,
    pub to: String,
    pub departure_time: String,
    /// Minutes.
    pub duration: i64,
    pub price: f64,
    /// Minutes.
    pub min_transfer_time: i64,
}

/// The full transport data document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportData {
    #[serde(default)]
    pub country_map: Vec<Vec<String>>,
    pub stations: Vec<StationRecord>,
    pub departures: Vec<DepartureRecord>,
}

impl TransportData {
    /// Parse a transport data document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a transport data document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Build the city registry from the station records.
    pub fn city_registry(&self) -> CityRegistry {
        self.stations
            .iter()
            .fold(CityRegistryBuilder::new(), |builder, s| {
                builder.add(&s.city, &s.bus_station, &s.train_station)
            })
            .build()
    }
}
