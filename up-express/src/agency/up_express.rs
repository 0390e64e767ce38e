//! UP Express rule set.

use crate::domain::agency::{AGENCY_COLOR, AGENCY_ROUTE_TYPE};
use crate::domain::{
    AgencyError, CalendarDateRecord, CalendarRecord, RouteId, RouteRecord, RouteType, StopId,
    StopRecord, Trip, TripRecord,
};

use super::{
    AgencyRules, CanonicalHeadsign, ServiceFilter, clean_stop_name, clean_trip_headsign,
    merge_headsign, resolve_route_id, resolve_stop_id,
};

/// Rules for the UP Express (Union Pearson Express) GTFS feed.
#[derive(Debug, Clone, Default)]
pub struct UpExpressRules {
    filter: ServiceFilter,
}

impl UpExpressRules {
    pub fn new(filter: ServiceFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &ServiceFilter {
        &self.filter
    }
}

impl AgencyRules for UpExpressRules {
    fn agency_color(&self) -> &str {
        AGENCY_COLOR
    }

    fn agency_route_type(&self) -> RouteType {
        AGENCY_ROUTE_TYPE
    }

    fn excluding_all(&self) -> bool {
        self.filter.excluding_all()
    }

    fn exclude_calendar(&self, calendar: &CalendarRecord) -> bool {
        self.filter.exclude_calendar(calendar)
    }

    fn exclude_calendar_date(&self, calendar_date: &CalendarDateRecord) -> bool {
        self.filter.exclude_calendar_date(calendar_date)
    }

    fn exclude_trip(&self, trip: &TripRecord) -> bool {
        self.filter.exclude_trip(trip)
    }

    fn route_id(&self, route: &RouteRecord) -> Result<RouteId, AgencyError> {
        resolve_route_id(route)
    }

    fn stop_id(&self, stop: &StopRecord) -> Result<StopId, AgencyError> {
        resolve_stop_id(stop)
    }

    fn clean_stop_name(&self, name: &str) -> String {
        clean_stop_name(name)
    }

    fn clean_trip_headsign(&self, headsign: &str) -> String {
        clean_trip_headsign(headsign)
    }

    fn merge_headsign(
        &self,
        first: &Trip,
        second: &Trip,
    ) -> Result<CanonicalHeadsign, AgencyError> {
        merge_headsign(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, ServiceId};

    /// Rule set that only supplies the required methods.
    struct GenericRules;

    impl AgencyRules for GenericRules {
        fn agency_color(&self) -> &str {
            "000000"
        }

        fn agency_route_type(&self) -> RouteType {
            RouteType::Bus
        }
    }

    fn trip(headsign: &str) -> Trip {
        Trip {
            trip_id: headsign.to_string(),
            route_id: RouteId(0),
            service_id: ServiceId::new("S1".to_string()).unwrap(),
            direction: Direction::Outbound,
            headsign: headsign.to_string(),
        }
    }

    fn route(id: &str) -> RouteRecord {
        RouteRecord {
            route_id: id.to_string(),
            route_short_name: None,
            route_long_name: None,
            route_type: None,
        }
    }

    #[test]
    fn agency_constants() {
        let rules = UpExpressRules::default();
        assert_eq!(rules.agency_color(), "555025");
        assert_eq!(rules.agency_route_type(), RouteType::Rail);
    }

    #[test]
    fn up_express_overrides_generic_policy() {
        let rules = UpExpressRules::default();
        assert_eq!(rules.route_id(&route("UP")).unwrap(), RouteId(0));
        assert_eq!(rules.clean_trip_headsign("UP Express Union Station"), "Union");

        let merged = rules
            .merge_headsign(&trip("Weston GO/UP"), &trip("Pearson Airport"))
            .unwrap();
        assert_eq!(merged.headsign, "Pearson Airport");
    }

    #[test]
    fn generic_policy_defaults() {
        let rules = GenericRules;
        assert!(!rules.excluding_all());
        assert_eq!(rules.route_id(&route("42")).unwrap(), RouteId(42));
        assert!(rules.route_id(&route("UP")).is_err());
        assert_eq!(rules.clean_stop_name("union station"), "Union Station");
        assert!(
            rules
                .merge_headsign(&trip("Weston GO/UP"), &trip("Pearson Airport"))
                .is_err()
        );
    }

    #[test]
    fn empty_service_set_excludes_all() {
        let rules = UpExpressRules::new(ServiceFilter::new(Some(Default::default())));
        assert!(rules.excluding_all());
        assert!(rules.filter().excluding_all());
    }
}
