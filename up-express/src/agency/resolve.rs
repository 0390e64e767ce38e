//! Route and stop identifier resolution.
//!
//! Both resolvers are total over the feed's known vocabulary and fail on
//! anything else; a silently wrong id would corrupt data persisted
//! downstream.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::domain::agency::{ROUTE_ID_UP, ROUTE_TOKEN_UP, STOP_CODES};
use crate::domain::{AgencyError, RouteId, RouteRecord, StopId, StopRecord};

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Canonical route id: the first run of digits in the raw id, or `0` for
/// the literal `UP` token.
///
/// ```
/// use up_express::agency::resolve_route_id;
/// use up_express::domain::{RouteId, RouteRecord};
///
/// let record = RouteRecord {
///     route_id: "UP-12a".to_string(),
///     route_short_name: None,
///     route_long_name: None,
///     route_type: None,
/// };
/// assert_eq!(resolve_route_id(&record).unwrap(), RouteId(12));
/// ```
pub fn resolve_route_id(route: &RouteRecord) -> Result<RouteId, AgencyError> {
    let unexpected = || AgencyError::UnexpectedRoute {
        record: route.clone(),
    };

    if let Some(digits) = DIGITS.find(&route.route_id) {
        // A run too long for u64 is as unusable as no digits at all
        let id = digits.as_str().parse::<u64>().map_err(|_| unexpected())?;
        debug!(raw = %route.route_id, id, "resolved route id from digits");
        return Ok(RouteId(id));
    }
    if route.route_id == ROUTE_TOKEN_UP {
        return Ok(ROUTE_ID_UP);
    }
    Err(unexpected())
}

/// Canonical stop id from the fixed stop code table. Stop ids are never
/// derived from digits.
pub fn resolve_stop_id(stop: &StopRecord) -> Result<StopId, AgencyError> {
    STOP_CODES
        .iter()
        .find(|(code, _)| *code == stop.stop_id)
        .map(|(_, id)| *id)
        .ok_or_else(|| AgencyError::UnexpectedStop {
            record: stop.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::agency::{STOP_ID_BLOOR, STOP_ID_PEARSON, STOP_ID_UNION, STOP_ID_WESTON};

    pub(crate) fn route(id: &str) -> RouteRecord {
        RouteRecord {
            route_id: id.to_string(),
            route_short_name: None,
            route_long_name: None,
            route_type: None,
        }
    }

    pub(crate) fn stop(id: &str) -> StopRecord {
        StopRecord {
            stop_id: id.to_string(),
            stop_name: format!("{id} Station"),
            stop_lat: None,
            stop_lon: None,
        }
    }

    #[test]
    fn route_first_digit_run() {
        assert_eq!(resolve_route_id(&route("UP-12a")).unwrap(), RouteId(12));
        assert_eq!(resolve_route_id(&route("7")).unwrap(), RouteId(7));
        assert_eq!(resolve_route_id(&route("A1B22")).unwrap(), RouteId(1));
        assert_eq!(resolve_route_id(&route("UP007")).unwrap(), RouteId(7));
    }

    #[test]
    fn route_up_token() {
        assert_eq!(resolve_route_id(&route("UP")).unwrap(), RouteId(0));
    }

    #[test]
    fn route_up_token_is_case_sensitive() {
        assert!(resolve_route_id(&route("up")).is_err());
        assert!(resolve_route_id(&route("UP ")).is_err());
    }

    #[test]
    fn route_unknown_fails_with_record() {
        let err = resolve_route_id(&route("XYZ")).unwrap_err();
        assert_eq!(
            err,
            AgencyError::UnexpectedRoute {
                record: route("XYZ")
            }
        );
    }

    #[test]
    fn route_overflowing_digits_fail() {
        assert!(resolve_route_id(&route("99999999999999999999999")).is_err());
    }

    #[test]
    fn stop_table() {
        assert_eq!(resolve_stop_id(&stop("WE")).unwrap(), STOP_ID_WESTON);
        assert_eq!(resolve_stop_id(&stop("UN")).unwrap(), STOP_ID_UNION);
        assert_eq!(resolve_stop_id(&stop("PA")).unwrap(), STOP_ID_PEARSON);
        assert_eq!(resolve_stop_id(&stop("BL")).unwrap(), STOP_ID_BLOOR);
        assert_eq!(STOP_ID_WESTON, StopId(10000));
        assert_eq!(STOP_ID_BLOOR, StopId(10003));
    }

    #[test]
    fn stop_unknown_fails_with_record() {
        for code in ["MI", "we", "UN ", "10001", ""] {
            let err = resolve_stop_id(&stop(code)).unwrap_err();
            assert_eq!(err, AgencyError::UnexpectedStop { record: stop(code) });
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::tests::{route, stop};
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any id with a digit run resolves to that run, whatever surrounds it
        #[test]
        fn digits_win(
            prefix in "[A-Za-z_-]{0,5}",
            n in 0u64..1_000_000,
            suffix in "[A-Za-z_-]{0,5}"
        ) {
            let raw = format!("{prefix}{n}{suffix}");
            prop_assert_eq!(resolve_route_id(&route(&raw)).unwrap(), RouteId(n));
        }

        /// Ids with no digits only resolve when they are exactly "UP"
        #[test]
        fn no_digits_fail_unless_up(raw in "[A-Za-z_-]{0,6}") {
            let result = resolve_route_id(&route(&raw));
            if raw == "UP" {
                prop_assert_eq!(result.unwrap(), RouteId(0));
            } else {
                prop_assert!(result.is_err());
            }
        }

        /// Only the four table codes resolve
        #[test]
        fn stop_codes_outside_table_fail(raw in "[A-Z]{1,3}") {
            let known = ["WE", "UN", "PA", "BL"].contains(&raw.as_str());
            prop_assert_eq!(resolve_stop_id(&stop(&raw)).is_ok(), known);
        }
    }
}
