//! Agency rule errors.
//!
//! Each of these means the rule tables and the feed disagree. They are not
//! data to skip: the run must stop and report the offending record.

use super::{RouteRecord, StopRecord, Trip};

/// Fatal errors raised while applying agency rules to feed records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AgencyError {
    /// Route identifier has no digits and is not a known literal token
    #[error("unexpected route id {:?} in {record:?}", .record.route_id)]
    UnexpectedRoute { record: RouteRecord },

    /// Stop identifier is not in the fixed stop table
    #[error("unexpected stop id {:?} in {record:?}", .record.stop_id)]
    UnexpectedStop { record: StopRecord },

    /// Two trips in the same direction disagree on headsign and no rule reconciles them
    #[error("unexpected trips to merge: {first:?} and {second:?}")]
    UnexpectedMerge { first: Box<Trip>, second: Box<Trip> },
}
