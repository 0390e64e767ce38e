//! GTFS service identifier type.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid service identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid service id: {reason}")]
pub struct InvalidServiceId {
    reason: &'static str,
}

/// A GTFS `service_id`.
///
/// Service identifiers are opaque keys linking calendars and calendar
/// exceptions to the trips that run under them. The only validation is that
/// they must be non-empty.
///
/// # Examples
///
/// ```
/// use up_express::domain::ServiceId;
///
/// let id = ServiceId::new("WEEKDAY".to_string()).unwrap();
/// assert_eq!(id.as_str(), "WEEKDAY");
///
/// // Empty strings are rejected
/// assert!(ServiceId::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceId(String);

/// The set of services considered active for the feed's publication window.
pub type ServiceIdSet = BTreeSet<ServiceId>;

impl ServiceId {
    /// Create a new service id from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidServiceId> {
        if s.is_empty() {
            return Err(InvalidServiceId {
                reason: "service id cannot be empty",
            });
        }
        Ok(ServiceId(s))
    }

    /// Returns the service id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ServiceId {
    type Error = InvalidServiceId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ServiceId::new(s)
    }
}

impl From<ServiceId> for String {
    fn from(id: ServiceId) -> Self {
        id.0
    }
}

impl fmt::Debug for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceId({})", self.0)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_id() {
        assert!(ServiceId::new("S1".to_string()).is_ok());
        assert!(ServiceId::new("20240315".to_string()).is_ok());
        assert!(ServiceId::new("UP-WKD-A".to_string()).is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(ServiceId::new("".to_string()).is_err());
    }

    #[test]
    fn display_and_debug() {
        let id = ServiceId::new("S1".to_string()).unwrap();
        assert_eq!(format!("{}", id), "S1");
        assert_eq!(format!("{:?}", id), "ServiceId(S1)");
    }

    #[test]
    fn deserialize_rejects_empty() {
        let ok: Result<ServiceId, _> = serde_json::from_str("\"S1\"");
        assert_eq!(ok.unwrap().as_str(), "S1");

        let err: Result<ServiceId, _> = serde_json::from_str("\"\"");
        assert!(err.is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ServiceId::new("S1".to_string()).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"S1\"");
    }
}
