//! Station and city identity types.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use super::DomainError;

/// Opaque identifier of a single station, e.g. `A_2_3` (bus) or `Z_2_3` (train).
///
/// Identifiers are cheap to clone and compare. Any non-empty string without
/// surrounding whitespace is accepted; the data loader owns the naming scheme.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(Arc<str>);

/// Opaque identifier of a city, e.g. `G_2_3`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(Arc<str>);

macro_rules! opaque_id {
    ($ty:ident, $what:literal) => {
        impl $ty {
            /// Parse an identifier, rejecting empty or padded input.
            pub fn parse(s: &str) -> Result<Self, DomainError> {
                if s.is_empty() {
                    return Err(DomainError::InvalidId {
                        kind: $what,
                        reason: "must not be empty",
                    });
                }
                if s.trim() != s {
                    return Err(DomainError::InvalidId {
                        kind: $what,
                        reason: "must not have surrounding whitespace",
                    });
                }
                Ok(Self(Arc::from(s)))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($ty), "({})"), self.0)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

opaque_id!(StationId, "station");
opaque_id!(CityId, "city");

/// Transport mode served by a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StationKind {
    Bus,
    Train,
}

impl StationKind {
    /// Parse a transport mode as written in timetable data.
    ///
    /// Accepts the timetable spellings `autobus` and `voz` as well as
    /// `bus` and `train`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "autobus" | "bus" => Ok(StationKind::Bus),
            "voz" | "train" => Ok(StationKind::Train),
            other => Err(DomainError::UnknownMode(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StationKind::Bus => "bus",
            StationKind::Train => "train",
        }
    }
}

impl fmt::Display for StationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bus or train station belonging to a city.
///
/// Two stations are equal iff their ids are equal.
#[derive(Debug, Clone)]
pub struct Station {
    id: StationId,
    city: CityId,
    kind: StationKind,
}

impl Station {
    pub fn new(id: StationId, city: CityId, kind: StationKind) -> Self {
        Self { id, city, kind }
    }

    pub fn id(&self) -> &StationId {
        &self.id
    }

    pub fn city(&self) -> &CityId {
        &self.city
    }

    pub fn kind(&self) -> StationKind {
        self.kind
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn cid(s: &str) -> CityId {
        CityId::parse(s).unwrap()
    }

    #[test]
    fn parse_ids() {
        assert_eq!(sid("A_2_3").as_str(), "A_2_3");
        assert_eq!(cid("G_2_3").to_string(), "G_2_3");
        assert_eq!("Z_0_1".parse::<StationId>().unwrap(), sid("Z_0_1"));
    }

    #[test]
    fn reject_empty_and_padded_ids() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse(" A_0_0").is_err());
        assert!(CityId::parse("G_0_0 ").is_err());
    }

    #[test]
    fn id_error_display() {
        let err = CityId::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid city id: must not be empty");
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", sid("A_0_0")), "StationId(A_0_0)");
        assert_eq!(format!("{:?}", cid("G_0_0")), "CityId(G_0_0)");
    }

    #[test]
    fn parse_kinds() {
        assert_eq!(StationKind::parse("autobus").unwrap(), StationKind::Bus);
        assert_eq!(StationKind::parse("bus").unwrap(), StationKind::Bus);
        assert_eq!(StationKind::parse("voz").unwrap(), StationKind::Train);
        assert_eq!(StationKind::parse("train").unwrap(), StationKind::Train);
        assert!(matches!(
            StationKind::parse("tram"),
            Err(DomainError::UnknownMode(m)) if m == "tram"
        ));
    }

    #[test]
    fn stations_equal_by_id_only() {
        let a = Station::new(sid("A_0_0"), cid("G_0_0"), StationKind::Bus);
        let b = Station::new(sid("A_0_0"), cid("G_9_9"), StationKind::Train);
        let c = Station::new(sid("Z_0_0"), cid("G_0_0"), StationKind::Train);
        assert_eq!(a, b);
        assert_ne!(a, c);

        use std::collections::HashSet;
        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn station_display() {
        let s = Station::new(sid("Z_1_2"), cid("G_1_2"), StationKind::Train);
        assert_eq!(s.to_string(), "Z_1_2 (train)");
    }
}
