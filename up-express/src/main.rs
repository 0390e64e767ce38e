use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use chrono::NaiveDate;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use up_express::agency::{ServiceFilter, UpExpressRules};
use up_express::config::{DEFAULT_LOOKAHEAD_DAYS, ParserConfig};
use up_express::feed::{Feed, useful_service_ids};
use up_express::output::write_schedule;
use up_express::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "up-express")]
#[command(about = "Generate UP Express train schedule data from its GTFS feed", long_about = None)]
struct Cli {
    /// Directory holding the extracted GTFS text files
    #[arg(short, long, default_value = "input/gtfs")]
    input: PathBuf,

    /// JSON file to write the schedule to
    #[arg(short, long, default_value = "output/schedule.json")]
    output: PathBuf,

    /// First day of the publication window (YYYYMMDD), defaults to today
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Number of days a service must run within to be kept
    #[arg(long, default_value_t = DEFAULT_LOOKAHEAD_DAYS)]
    lookahead_days: u32,
}

fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%Y%m%d")
}

impl Cli {
    fn into_config(self) -> ParserConfig {
        let config =
            ParserConfig::new(self.input, self.output).with_lookahead_days(self.lookahead_days);
        match self.date {
            Some(date) => config.with_reference_date(date),
            None => config,
        }
    }
}

fn run(config: &ParserConfig) -> Result<(), Box<dyn std::error::Error>> {
    let feed = Feed::load_from_dir(config.input_dir())?;
    let service_ids = useful_service_ids(&feed, config);
    let rules = UpExpressRules::new(ServiceFilter::new(service_ids));

    let schedule = Pipeline::new(rules).run(&feed)?;
    write_schedule(&schedule, &config.output_path)?;
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Cli::parse().into_config();

    info!("Generating UP Express train data...");
    let start = Instant::now();
    match run(&config) {
        Ok(()) => {
            info!(elapsed = ?start.elapsed(), "Generating UP Express train data... DONE");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
