//! Run configuration.

use std::path::{Path, PathBuf};

use chrono::{Days, Local, NaiveDate};

/// Default number of days, starting at the reference date, a service must
/// run within to be kept.
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 7;

/// Configuration for one parser run.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Directory holding the extracted GTFS text files.
    pub input_dir: PathBuf,

    /// Where the transformed schedule is written.
    pub output_path: PathBuf,

    /// First day of the publication window.
    pub reference_date: NaiveDate,

    /// Length of the publication window in days.
    pub lookahead_days: u32,
}

impl ParserConfig {
    /// Create a configuration reading from `input_dir` and writing to
    /// `output_path`, with a window starting today.
    pub fn new(input_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            reference_date: Local::now().date_naive(),
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
        }
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = date;
        self
    }

    pub fn with_lookahead_days(mut self, days: u32) -> Self {
        self.lookahead_days = days;
        self
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Days in the publication window, in order.
    pub fn window(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.lookahead_days).filter_map(|offset| {
            self.reference_date
                .checked_add_days(Days::new(u64::from(offset)))
        })
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new("input/gtfs", "output/schedule.json")
    }
}
