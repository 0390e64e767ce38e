//! GTFS feed loading.
//!
//! Reads the handful of text files the agency rules need from an extracted
//! GTFS directory. No schema validation beyond what deserializing each row
//! requires.

mod calendar;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use crate::domain::{CalendarDateRecord, CalendarRecord, RouteRecord, StopRecord, TripRecord};

pub use calendar::useful_service_ids;

/// Errors while reading a GTFS directory.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// A required file is not in the feed directory
    #[error("missing required feed file {}", .path.display())]
    MissingFile { path: PathBuf },

    /// A file could not be read or a row did not deserialize
    #[error("{}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// The raw records of one feed.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    pub routes: Vec<RouteRecord>,
    pub stops: Vec<StopRecord>,
    pub trips: Vec<TripRecord>,
    pub calendars: Vec<CalendarRecord>,
    pub calendar_dates: Vec<CalendarDateRecord>,
}

impl Feed {
    /// Load a feed from a directory of GTFS text files.
    ///
    /// `routes.txt`, `stops.txt` and `trips.txt` are required. Missing
    /// calendar files are read as empty.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, FeedError> {
        let dir = dir.as_ref();
        let feed = Self {
            routes: read_records(dir, "routes.txt", true)?,
            stops: read_records(dir, "stops.txt", true)?,
            trips: read_records(dir, "trips.txt", true)?,
            calendars: read_records(dir, "calendar.txt", false)?,
            calendar_dates: read_records(dir, "calendar_dates.txt", false)?,
        };
        info!(
            dir = %dir.display(),
            routes = feed.routes.len(),
            stops = feed.stops.len(),
            trips = feed.trips.len(),
            calendars = feed.calendars.len(),
            calendar_dates = feed.calendar_dates.len(),
            "loaded feed"
        );
        Ok(feed)
    }

    /// True when the feed carries no calendar information at all.
    pub fn has_no_calendar(&self) -> bool {
        self.calendars.is_empty() && self.calendar_dates.is_empty()
    }
}

fn read_records<T: DeserializeOwned>(
    dir: &Path,
    name: &str,
    required: bool,
) -> Result<Vec<T>, FeedError> {
    let path = dir.join(name);
    if !path.is_file() {
        if required {
            return Err(FeedError::MissingFile { path });
        }
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&path)
        .map_err(|source| FeedError::Csv {
            path: path.clone(),
            source,
        })?;

    reader
        .deserialize()
        .map(|rec| {
            rec.map_err(|source| FeedError::Csv {
                path: path.clone(),
                source,
            })
        })
        .collect()
}
