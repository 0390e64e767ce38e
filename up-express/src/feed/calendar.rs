//! Which services run during the publication window.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{info, warn};

use crate::config::ParserConfig;
use crate::domain::{CalendarRecord, ExceptionType, ServiceId, ServiceIdSet};

use super::Feed;

/// One service's regular pattern plus its exceptions.
#[derive(Default)]
struct ServiceDays<'a> {
    calendar: Option<&'a CalendarRecord>,
    added: BTreeSet<NaiveDate>,
    removed: BTreeSet<NaiveDate>,
}

impl ServiceDays<'_> {
    fn runs_on(&self, day: NaiveDate) -> bool {
        if self.added.contains(&day) {
            return true;
        }
        if self.removed.contains(&day) {
            return false;
        }
        match self.calendar {
            Some(cal) => day >= cal.start_date && day <= cal.end_date && runs_on_weekday(cal, day),
            None => false,
        }
    }
}

fn runs_on_weekday(cal: &CalendarRecord, day: NaiveDate) -> bool {
    match day.weekday() {
        Weekday::Mon => cal.monday,
        Weekday::Tue => cal.tuesday,
        Weekday::Wed => cal.wednesday,
        Weekday::Thu => cal.thursday,
        Weekday::Fri => cal.friday,
        Weekday::Sat => cal.saturday,
        Weekday::Sun => cal.sunday,
    }
}

/// Services running on at least one day of the configured window.
///
/// Returns `None` when the feed has no calendar data at all, so there is
/// nothing to decide with. An empty set means nothing runs in the window.
pub fn useful_service_ids(feed: &Feed, config: &ParserConfig) -> Option<ServiceIdSet> {
    if feed.has_no_calendar() {
        warn!("feed has no calendar data; not filtering by service");
        return None;
    }

    let mut services: BTreeMap<&ServiceId, ServiceDays> = BTreeMap::new();
    for cal in &feed.calendars {
        if services.entry(&cal.service_id).or_default().calendar.replace(cal).is_some() {
            warn!(service_id = %cal.service_id, "duplicate calendar row; keeping the last one");
        }
    }
    for date in &feed.calendar_dates {
        let days = services.entry(&date.service_id).or_default();
        match date.exception_type {
            ExceptionType::Added => days.added.insert(date.date),
            ExceptionType::Removed => days.removed.insert(date.date),
        };
    }

    let window: Vec<NaiveDate> = config.window().collect();
    let useful: ServiceIdSet = services
        .into_iter()
        .filter(|(_, days)| window.iter().any(|day| days.runs_on(*day)))
        .map(|(id, _)| id.clone())
        .collect();

    info!(
        from = %config.reference_date,
        days = config.lookahead_days,
        services = useful.len(),
        "computed useful service ids"
    );
    Some(useful)
}
