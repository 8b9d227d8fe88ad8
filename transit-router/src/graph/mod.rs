//! Transit graph: stations joined by scheduled trips and same-city transfers.
//!
//! The graph is built once by [`build_graph`] from the city registry and the
//! departure list, then shared read-only by every route query.

mod builder;
mod connection;
mod registry;
mod transit;

pub use builder::{BuildReport, SkipReason, TransferSettings, build_graph};
pub use connection::{Connection, ConnectionKind};
pub use registry::{CityRegistry, CityRegistryBuilder, CityStations};
pub use transit::TransitGraph;
