//! Service-set filtering of calendars and trips.

use crate::domain::{CalendarDateRecord, CalendarRecord, ServiceId, ServiceIdSet, TripRecord};

/// Decides which calendar, calendar-exception and trip records to drop.
///
/// Holds the set of useful service ids computed once at startup. When that
/// set is absent the filter adds no exclusions of its own.
#[derive(Debug, Clone, Default)]
pub struct ServiceFilter {
    service_ids: Option<ServiceIdSet>,
}

impl ServiceFilter {
    pub fn new(service_ids: Option<ServiceIdSet>) -> Self {
        Self { service_ids }
    }

    /// The active service ids, if they were computed.
    pub fn service_ids(&self) -> Option<&ServiceIdSet> {
        self.service_ids.as_ref()
    }

    /// True when the set was computed and nothing in it is active.
    pub fn excluding_all(&self) -> bool {
        self.service_ids.as_ref().is_some_and(|ids| ids.is_empty())
    }

    pub fn is_service_active(&self, service_id: &ServiceId) -> bool {
        match &self.service_ids {
            Some(ids) => ids.contains(service_id),
            None => true,
        }
    }

    pub fn exclude_calendar(&self, calendar: &CalendarRecord) -> bool {
        !self.is_service_active(&calendar.service_id)
    }

    pub fn exclude_calendar_date(&self, calendar_date: &CalendarDateRecord) -> bool {
        !self.is_service_active(&calendar_date.service_id)
    }

    pub fn exclude_trip(&self, trip: &TripRecord) -> bool {
        !self.is_service_active(&trip.service_id)
    }
}
