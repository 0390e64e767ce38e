//! UP Express GTFS feed rules.
//!
//! Customises a generic GTFS ingestion pipeline for the Union Pearson
//! Express: which calendars and trips are relevant, how the feed's route and
//! stop ids map onto stable numeric ids, and how stop names and headsigns
//! are cleaned and reconciled for display.

pub mod agency;
pub mod config;
pub mod domain;
pub mod feed;
pub mod output;
pub mod pipeline;
pub mod text;
