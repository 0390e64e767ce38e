//! Generic feed ingestion.
//!
//! Walks the feed records once, asking an [`AgencyRules`] implementation
//! what to keep, how to number it and how to label it. Nothing in here is
//! specific to one agency.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::agency::{AgencyRules, CanonicalHeadsign};
use crate::domain::{AgencyError, Direction, RouteId, RouteType, ServiceId, StopId, Trip};
use crate::feed::Feed;

/// Agency-wide display attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgencyInfo {
    pub color: String,
    pub route_type: RouteType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub id: RouteId,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// The transformed feed. Every list is sorted by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub agency: AgencyInfo,
    pub service_ids: Vec<ServiceId>,
    pub routes: Vec<Route>,
    pub stops: Vec<Stop>,
    pub trips: Vec<Trip>,
    pub headsigns: Vec<CanonicalHeadsign>,
}

impl Schedule {
    fn empty(agency: AgencyInfo) -> Self {
        Self {
            agency,
            service_ids: Vec::new(),
            routes: Vec::new(),
            stops: Vec::new(),
            trips: Vec::new(),
            headsigns: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.stops.is_empty() && self.trips.is_empty()
    }
}

/// Feed ingestion driven by a set of agency rules.
pub struct Pipeline<R> {
    rules: R,
}

impl<R: AgencyRules> Pipeline<R> {
    pub fn new(rules: R) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Transform a feed. Stops at the first record the rules reject.
    pub fn run(&self, feed: &Feed) -> Result<Schedule, AgencyError> {
        let agency = AgencyInfo {
            color: self.rules.agency_color().to_string(),
            route_type: self.rules.agency_route_type(),
        };
        if self.rules.excluding_all() {
            info!("no active service; excluding the whole feed");
            return Ok(Schedule::empty(agency));
        }

        let service_ids = self.kept_service_ids(feed);
        let (routes, raw_route_ids) = self.resolve_routes(feed)?;
        let stops = self.resolve_stops(feed)?;
        let mut trips = self.resolve_trips(feed, &raw_route_ids);
        let headsigns = self.merge_headsigns(&trips)?;

        for trip in &mut trips {
            if let Some(canonical) = headsigns.get(&(trip.route_id, trip.direction)) {
                trip.headsign.clone_from(&canonical.headsign);
            }
        }
        trips.sort_by(|a, b| a.trip_id.cmp(&b.trip_id));

        let schedule = Schedule {
            agency,
            service_ids: service_ids.into_iter().collect(),
            routes: routes.into_values().collect(),
            stops: stops.into_values().collect(),
            trips,
            headsigns: headsigns.into_values().collect(),
        };
        info!(
            services = schedule.service_ids.len(),
            routes = schedule.routes.len(),
            stops = schedule.stops.len(),
            trips = schedule.trips.len(),
            "transformed feed"
        );
        Ok(schedule)
    }

    fn kept_service_ids(&self, feed: &Feed) -> BTreeSet<ServiceId> {
        let calendars = feed
            .calendars
            .iter()
            .filter(|cal| !self.rules.exclude_calendar(cal))
            .map(|cal| cal.service_id.clone());
        let dates = feed
            .calendar_dates
            .iter()
            .filter(|date| !self.rules.exclude_calendar_date(date))
            .map(|date| date.service_id.clone());
        calendars.chain(dates).collect()
    }

    /// Canonical routes, plus the raw id -> canonical id lookup trips need.
    fn resolve_routes<'f>(
        &self,
        feed: &'f Feed,
    ) -> Result<(BTreeMap<RouteId, Route>, HashMap<&'f str, RouteId>), AgencyError> {
        let mut routes = BTreeMap::new();
        let mut raw_ids = HashMap::new();
        for rec in &feed.routes {
            let id = self.rules.route_id(rec)?;
            raw_ids.insert(rec.route_id.as_str(), id);
            if let Entry::Vacant(entry) = routes.entry(id) {
                entry.insert(Route {
                    id,
                    short_name: rec.route_short_name.clone(),
                    long_name: rec.route_long_name.clone(),
                });
            } else {
                debug!(raw = %rec.route_id, %id, "route shares a canonical id; keeping the first");
            }
        }
        Ok((routes, raw_ids))
    }

    fn resolve_stops(&self, feed: &Feed) -> Result<BTreeMap<StopId, Stop>, AgencyError> {
        let mut stops = BTreeMap::new();
        for rec in &feed.stops {
            let id = self.rules.stop_id(rec)?;
            let name = self.rules.clean_stop_name(&rec.stop_name);
            debug!(raw = %rec.stop_id, %id, %name, "resolved stop");
            stops.entry(id).or_insert(Stop {
                id,
                name,
                lat: rec.stop_lat,
                lon: rec.stop_lon,
            });
        }
        Ok(stops)
    }

    fn resolve_trips(&self, feed: &Feed, raw_route_ids: &HashMap<&str, RouteId>) -> Vec<Trip> {
        let mut trips = Vec::new();
        for rec in &feed.trips {
            if self.rules.exclude_trip(rec) {
                debug!(trip_id = %rec.trip_id, service_id = %rec.service_id, "excluded trip");
                continue;
            }
            let Some(route_id) = raw_route_ids.get(rec.route_id.as_str()) else {
                warn!(
                    trip_id = %rec.trip_id,
                    route_id = %rec.route_id,
                    "trip references unknown route; skipping"
                );
                continue;
            };
            let headsign = self
                .rules
                .clean_trip_headsign(rec.trip_headsign.as_deref().unwrap_or_default());
            trips.push(Trip {
                trip_id: rec.trip_id.clone(),
                route_id: *route_id,
                service_id: rec.service_id.clone(),
                direction: rec.direction,
                headsign,
            });
        }
        trips
    }

    /// One headsign per route and direction, reconciling conflicts through
    /// the rules.
    fn merge_headsigns(
        &self,
        trips: &[Trip],
    ) -> Result<BTreeMap<(RouteId, Direction), CanonicalHeadsign>, AgencyError> {
        // First trip seen per group, unmodified, and the headsign chosen so far
        let mut chosen: BTreeMap<(RouteId, Direction), (Trip, String)> = BTreeMap::new();
        for trip in trips {
            match chosen.entry((trip.route_id, trip.direction)) {
                Entry::Vacant(entry) => {
                    entry.insert((trip.clone(), trip.headsign.clone()));
                }
                Entry::Occupied(mut entry) => {
                    let (first, headsign) = entry.get_mut();
                    if *headsign == trip.headsign {
                        continue;
                    }
                    let current = Trip {
                        headsign: headsign.clone(),
                        ..first.clone()
                    };
                    let merged = self
                        .rules
                        .merge_headsign(&current, trip)
                        .map_err(|err| match err {
                            AgencyError::UnexpectedMerge { second, .. } => {
                                AgencyError::UnexpectedMerge {
                                    first: Box::new(first.clone()),
                                    second,
                                }
                            }
                            other => other,
                        })?;
                    *headsign = merged.headsign;
                }
            }
        }
        Ok(chosen
            .into_iter()
            .map(|(key, (trip, headsign))| {
                let canonical = CanonicalHeadsign {
                    route_id: trip.route_id,
                    direction: trip.direction,
                    headsign,
                };
                (key, canonical)
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
