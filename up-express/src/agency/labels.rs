//! Stop name and trip headsign normalization.
//!
//! Raw feed labels carry brand and mode boilerplate ("UP Express", "GO/UP",
//! "Station", French "Gare"/"Aéroport") that is redundant once everything is
//! scoped to this one agency. Removal order matters where patterns overlap:
//! "UP Express" has to go before a bare "up" would eat part of it.

use lazy_static::lazy_static;
use regex::Regex;

use crate::text::{clean_label, clean_street_types, fixpoint};

lazy_static! {
    static ref AEROPORT: Regex = Regex::new(r"(?i)a[eé]roport").unwrap();
    static ref GARE: Regex = Regex::new(r"(?i)gare").unwrap();
    static ref UP_EXPRESS: Regex = Regex::new(r"(?i)UP Express ").unwrap();
    static ref STATION: Regex = Regex::new(r"(?i)station").unwrap();
    static ref UP_EXPRESS_GO: Regex = Regex::new(r"(?i)up express|up|go/?").unwrap();
}

/// Clean a trip headsign for display.
///
/// ```
/// use up_express::agency::clean_trip_headsign;
///
/// assert_eq!(clean_trip_headsign("UP Express Union Station"), "Union");
/// assert_eq!(clean_trip_headsign("Gare Union"), "Union");
/// ```
pub fn clean_trip_headsign(headsign: &str) -> String {
    fixpoint(headsign, |headsign| {
        let headsign = AEROPORT.replace_all(headsign, "");
        let headsign = GARE.replace_all(&headsign, "");
        let headsign = UP_EXPRESS.replace_all(&headsign, "");
        let headsign = STATION.replace_all(&headsign, "");
        clean_label(&clean_street_types(&headsign))
    })
}

/// Clean a stop name for display.
///
/// A single ordered pass. Unlike headsigns, a removal that joins fragments
/// into a new token leaves that token in place.
///
/// ```
/// use up_express::agency::clean_stop_name;
///
/// assert_eq!(clean_stop_name("Union Station GO/UP"), "Union");
/// ```
pub fn clean_stop_name(name: &str) -> String {
    let name = STATION.replace_all(name, "");
    let name = UP_EXPRESS_GO.replace_all(&name, "");
    clean_label(&clean_street_types(&name))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Headsign-like text built from feed vocabulary plus noise.
    fn headsign_like() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                Just("UP Express".to_string()),
                Just("Station".to_string()),
                Just("Gare".to_string()),
                Just("Aéroport".to_string()),
                Just("Pearson".to_string()),
                Just("Airport".to_string()),
                Just("Weston".to_string()),
                Just("GO/UP".to_string()),
                Just("Union".to_string()),
                Just("Street".to_string()),
                "[a-zA-Z/() -]{1,8}",
            ],
            0..6,
        )
        .prop_map(|words| words.join(" "))
    }

    proptest! {
        /// Cleaning a headsign twice gives the same result as once
        #[test]
        fn headsign_idempotent(s in headsign_like()) {
            let once = clean_trip_headsign(&s);
            prop_assert_eq!(clean_trip_headsign(&once), once);
        }

        /// No cleaned headsign still contains a removable token
        #[test]
        fn headsign_has_no_station_token(s in headsign_like()) {
            let cleaned = clean_trip_headsign(&s).to_lowercase();
            prop_assert!(!cleaned.contains("station"));
            prop_assert!(!cleaned.contains("gare"));
        }
    }
}
