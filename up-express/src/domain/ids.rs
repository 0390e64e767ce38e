//! Canonical numeric identifiers.
//!
//! Downstream consumers persist data keyed by these numbers, so they must be
//! stable across runs for the same feed input.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical numeric route identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub u64);

/// Canonical numeric stop identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(pub u32);

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// GTFS `route_type` values an agency can be published as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "u16")]
pub enum RouteType {
    Tram,
    Subway,
    Rail,
    Bus,
    Ferry,
    CableTram,
    AerialLift,
    Funicular,
    Trolleybus,
    Monorail,
}

impl From<RouteType> for u16 {
    fn from(value: RouteType) -> Self {
        use RouteType::*;
        match value {
            Tram => 0,
            Subway => 1,
            Rail => 2,
            Bus => 3,
            Ferry => 4,
            CableTram => 5,
            AerialLift => 6,
            Funicular => 7,
            Trolleybus => 11,
            Monorail => 12,
        }
    }
}
