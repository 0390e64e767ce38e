//! Reconciliation of conflicting trip headsigns.
//!
//! The feed models the whole line as route `UP` with two headsigns per
//! direction. Trips ending at Weston are short turns of the Pearson service,
//! so that one pair collapses to "Pearson Airport". Every other conflict is
//! unanticipated and fatal.

use serde::Serialize;
use tracing::debug;

use crate::domain::agency::ROUTE_ID_UP;
use crate::domain::{AgencyError, Direction, RouteId, Trip};

const HEADSIGN_WESTON: &str = "Weston GO/UP";
const HEADSIGN_PEARSON: &str = "Pearson Airport";

/// The one display headsign chosen for a route and direction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct CanonicalHeadsign {
    pub route_id: RouteId,
    pub direction: Direction,
    pub headsign: String,
}

/// Pick one headsign for two trips of the same route and direction.
pub fn merge_headsign(first: &Trip, second: &Trip) -> Result<CanonicalHeadsign, AgencyError> {
    let canonical = |headsign: &str| CanonicalHeadsign {
        route_id: first.route_id,
        direction: first.direction,
        headsign: headsign.to_string(),
    };
    let unexpected = || AgencyError::UnexpectedMerge {
        first: Box::new(first.clone()),
        second: Box::new(second.clone()),
    };

    if first.route_id != second.route_id || first.direction != second.direction {
        return Err(unexpected());
    }
    if first.headsign == second.headsign {
        return Ok(canonical(&first.headsign));
    }
    if first.route_id == ROUTE_ID_UP
        && is_pair(&first.headsign, &second.headsign, HEADSIGN_WESTON, HEADSIGN_PEARSON)
    {
        debug!(
            route = %first.route_id,
            direction = %first.direction,
            "merged {:?} and {:?}", first.headsign, second.headsign
        );
        return Ok(canonical(HEADSIGN_PEARSON));
    }
    Err(unexpected())
}

/// Unordered pair equality.
fn is_pair(a: &str, b: &str, x: &str, y: &str) -> bool {
    (a == x && b == y) || (a == y && b == x)
}
