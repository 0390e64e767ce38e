//! Constants the rest of the pipeline reads about this agency.
//!
//! The stop ids are persisted downstream; never renumber them.

use super::{RouteId, RouteType, StopId};

/// Agency colour, brown from the UP Express web site CSS.
pub const AGENCY_COLOR: &str = "555025";

/// UP Express only runs trains.
pub const AGENCY_ROUTE_TYPE: RouteType = RouteType::Rail;

/// The single non-numeric route token used by the feed.
pub const ROUTE_TOKEN_UP: &str = "UP";

/// Canonical id for the `UP` route: all directions share one route.
pub const ROUTE_ID_UP: RouteId = RouteId(0);

pub const STOP_ID_WESTON: StopId = StopId(10000);
pub const STOP_ID_UNION: StopId = StopId(10001);
pub const STOP_ID_PEARSON: StopId = StopId(10002);
pub const STOP_ID_BLOOR: StopId = StopId(10003);

/// Raw `stop_id` code to canonical stop id.
pub const STOP_CODES: [(&str, StopId); 4] = [
    ("WE", STOP_ID_WESTON),
    ("UN", STOP_ID_UNION),
    ("PA", STOP_ID_PEARSON),
    ("BL", STOP_ID_BLOOR),
];
