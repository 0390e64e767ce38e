//! Domain types for the UP Express feed rules.
//!
//! Feed records as read from GTFS text files, the canonical identifiers
//! derived from them, and the agency constants. Validated types enforce
//! their invariants at construction time.

pub mod agency;
mod error;
mod ids;
mod records;
mod service_id;

pub use error::AgencyError;
pub use ids::{RouteId, RouteType, StopId};
pub use records::{
    CalendarDateRecord, CalendarRecord, Direction, ExceptionType, RouteRecord, StopRecord, Trip,
    TripRecord,
};
pub use service_id::{InvalidServiceId, ServiceId, ServiceIdSet};
