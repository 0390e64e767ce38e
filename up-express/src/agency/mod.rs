//! Agency rules plugged into the generic ingestion pipeline.
//!
//! [`AgencyRules`] is the seam: the pipeline asks it which records to drop,
//! how to number routes and stops, how to clean labels and how to settle
//! headsign conflicts. The default methods are the generic policy;
//! [`UpExpressRules`] overrides them for UP Express.

mod filter;
mod labels;
mod merge;
mod resolve;
mod up_express;

pub use filter::ServiceFilter;
pub use labels::{clean_stop_name, clean_trip_headsign};
pub use merge::{CanonicalHeadsign, merge_headsign};
pub use resolve::{resolve_route_id, resolve_stop_id};
pub use up_express::UpExpressRules;

use crate::domain::{
    AgencyError, CalendarDateRecord, CalendarRecord, RouteId, RouteRecord, RouteType, StopId,
    StopRecord, Trip, TripRecord,
};
use crate::text::clean_label;

/// Per-agency customisation of feed ingestion.
pub trait AgencyRules {
    /// Six hex digit display colour, no leading `#`.
    fn agency_color(&self) -> &str;

    fn agency_route_type(&self) -> RouteType;

    /// Drop the whole feed.
    fn excluding_all(&self) -> bool {
        false
    }

    fn exclude_calendar(&self, _calendar: &CalendarRecord) -> bool {
        false
    }

    fn exclude_calendar_date(&self, _calendar_date: &CalendarDateRecord) -> bool {
        false
    }

    fn exclude_trip(&self, _trip: &TripRecord) -> bool {
        false
    }

    /// Generic policy: the raw id must already be a number.
    fn route_id(&self, route: &RouteRecord) -> Result<RouteId, AgencyError> {
        route
            .route_id
            .parse::<u64>()
            .map(RouteId)
            .map_err(|_| AgencyError::UnexpectedRoute {
                record: route.clone(),
            })
    }

    /// Generic policy: the raw id must already be a number.
    fn stop_id(&self, stop: &StopRecord) -> Result<StopId, AgencyError> {
        stop.stop_id
            .parse::<u32>()
            .map(StopId)
            .map_err(|_| AgencyError::UnexpectedStop {
                record: stop.clone(),
            })
    }

    fn clean_stop_name(&self, name: &str) -> String {
        clean_label(name)
    }

    fn clean_trip_headsign(&self, headsign: &str) -> String {
        clean_label(headsign)
    }

    /// Generic policy: conflicting headsigns are never merged.
    fn merge_headsign(
        &self,
        first: &Trip,
        second: &Trip,
    ) -> Result<CanonicalHeadsign, AgencyError> {
        Err(AgencyError::UnexpectedMerge {
            first: Box::new(first.clone()),
            second: Box::new(second.clone()),
        })
    }
}
