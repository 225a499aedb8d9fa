extern crate almanac as lib;

use chrono::{Datelike, Local, Month, NaiveDate};
use flexi_logger::{FileSpec, Logger};
use itertools::Itertools;
use num_traits::FromPrimitive;
use std::path::PathBuf;
use structopt::StructOpt;

use lib::config::{self, Config};
use lib::daykey::DayKey;
use lib::schedule::{self, Schedule};
use lib::view::{MonthView, WEEKDAY_LABELS};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "alm",
    author = "reedts <j.reedts@gmail.com>",
    about = "Almanac - renders a month grid with scheduled events."
)]
pub struct Args {
    #[structopt(help = "schedule file with [[schedule]] records", parse(from_os_str))]
    pub schedules: Option<PathBuf>,

    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "m",
        long = "month",
        help = "month to display as YYYYMM (defaults to the current month)"
    )]
    pub month: Option<String>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let config = config::load_suitable_config(args.configfile.as_deref())?;

    let schedules = match &args.schedules {
        Some(path) => schedule::load_schedules(path)?,
        None => Vec::new(),
    };

    let reference = match &args.month {
        Some(raw) => parse_month_arg(raw)?,
        None => Local::now().date_naive(),
    };

    render_month(reference, &schedules, &config);

    Ok(())
}

fn parse_month_arg(raw: &str) -> Result<NaiveDate, lib::Error> {
    let key: DayKey = format!("{}01", raw).parse()?;
    Ok(key.date())
}

fn render_month(reference: NaiveDate, schedules: &[Schedule], config: &Config) {
    let view = MonthView::build(reference, schedules, config);
    let today = Local::now().date_naive();

    let month_name = Month::from_u32(reference.month()).unwrap().name();
    println!("{} {}", month_name, reference.year());
    println!(
        "{}",
        WEEKDAY_LABELS
            .iter()
            .map(|label| format!("{:>5}", label))
            .join("")
    );

    for week in view.weeks() {
        let numbers = week
            .iter()
            .map(|cell| {
                let num = if !cell.in_month {
                    format!("({})", cell.date.day())
                } else if cell.date == today {
                    format!("{}*", cell.date.day())
                } else {
                    cell.date.day().to_string()
                };
                format!("{:>5}", num)
            })
            .join("");
        println!("{}", numbers);

        for cell in week.iter().filter(|cell| !cell.events.visible.is_empty()) {
            let titles = cell
                .events
                .visible
                .iter()
                .map(|event| event.title.as_str())
                .join(", ");

            if cell.events.overflow > 0 {
                println!(
                    "      {}: {} (+{} more)",
                    cell.key, titles, cell.events.overflow
                );
            } else {
                println!("      {}: {}", cell.key, titles);
            }
        }
    }
}
