//! Feed records and the trips assembled from them.
//!
//! The `*Record` types mirror rows of the GTFS text files. Only the columns
//! this crate reads are modelled; anything else in the file is ignored.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{RouteId, ServiceId};

/// A row of `routes.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub route_id: String,
    #[serde(default)]
    pub route_short_name: Option<String>,
    #[serde(default)]
    pub route_long_name: Option<String>,
    /// Raw GTFS code, kept as read. Extended codes (100-1702) are valid.
    #[serde(default)]
    pub route_type: Option<u16>,
}

/// A row of `stops.txt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRecord {
    pub stop_id: String,
    pub stop_name: String,
    #[serde(default)]
    pub stop_lat: Option<f64>,
    #[serde(default)]
    pub stop_lon: Option<f64>,
}

/// A row of `trips.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    pub trip_id: String,
    pub route_id: String,
    pub service_id: ServiceId,
    #[serde(default)]
    pub trip_headsign: Option<String>,
    #[serde(default, rename = "direction_id")]
    pub direction: Direction,
}

/// A row of `calendar.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRecord {
    pub service_id: ServiceId,
    #[serde(deserialize_with = "parse_bool", serialize_with = "write_bool")]
    pub monday: bool,
    #[serde(deserialize_with = "parse_bool", serialize_with = "write_bool")]
    pub tuesday: bool,
    #[serde(deserialize_with = "parse_bool", serialize_with = "write_bool")]
    pub wednesday: bool,
    #[serde(deserialize_with = "parse_bool", serialize_with = "write_bool")]
    pub thursday: bool,
    #[serde(deserialize_with = "parse_bool", serialize_with = "write_bool")]
    pub friday: bool,
    #[serde(deserialize_with = "parse_bool", serialize_with = "write_bool")]
    pub saturday: bool,
    #[serde(deserialize_with = "parse_bool", serialize_with = "write_bool")]
    pub sunday: bool,
    #[serde(with = "gtfs_date")]
    pub start_date: NaiveDate,
    #[serde(with = "gtfs_date")]
    pub end_date: NaiveDate,
}

/// A row of `calendar_dates.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDateRecord {
    pub service_id: ServiceId,
    #[serde(with = "gtfs_date")]
    pub date: NaiveDate,
    pub exception_type: ExceptionType,
}

/// Whether a calendar exception adds or removes a day of service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ExceptionType {
    Added,
    Removed,
}

impl TryFrom<u8> for ExceptionType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ExceptionType::Added),
            2 => Ok(ExceptionType::Removed),
            x => Err(format!("unknown exception_type {x}")),
        }
    }
}

impl From<ExceptionType> for u8 {
    fn from(value: ExceptionType) -> Self {
        match value {
            ExceptionType::Added => 1,
            ExceptionType::Removed => 2,
        }
    }
}

/// Trip direction. `direction_id` 0 is outbound, 1 is inbound; which physical
/// direction each one means is up to the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    // A missing direction_id is only used for grouping, so outbound is fine
    #[default]
    Outbound,
    Inbound,
}

impl Direction {
    pub fn as_gtfs(self) -> u8 {
        match self {
            Direction::Outbound => 0,
            Direction::Inbound => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Outbound => f.write_str("outbound"),
            Direction::Inbound => f.write_str("inbound"),
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u8(self.as_gtfs())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        match <Option<u8>>::deserialize(d)? {
            Some(0) | None => Ok(Direction::Outbound),
            Some(1) => Ok(Direction::Inbound),
            Some(x) => Err(serde::de::Error::custom(format!(
                "unknown direction_id {x}"
            ))),
        }
    }
}

/// A trip after identifier resolution and headsign cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trip {
    pub trip_id: String,
    pub route_id: RouteId,
    pub service_id: ServiceId,
    pub direction: Direction,
    pub headsign: String,
}

fn parse_bool<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    match <u8>::deserialize(d)? {
        1 => Ok(true),
        0 => Ok(false),
        n => Err(serde::de::Error::custom(format!("unknown bool value {n}"))),
    }
}

fn write_bool<S: Serializer>(value: &bool, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u8(u8::from(*value))
}

/// GTFS dates are written `YYYYMMDD`.
mod gtfs_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y%m%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
