use crate::constants::{CALENDAR_BY_PIN_URL, DATE_FORMAT, PINCODE_HELP_TEXT, RANGE_SCAN_SPAN};
use crate::errors::{AppError, AppResult};
use crate::logging;
use crate::models::{Query, VaccineFilter};
use crate::scanner;
use chrono::{Local, NaiveDate};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info};

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parses command-line arguments and runs the availability scan.
///
/// The workflow mirrors the pipeline described in the crate docs:
/// 1. Resolves the query (pin code, date, filters) from CLI arguments
/// 2. Prints a one-time banner summarizing the resolved query
/// 3. Iterates the pin-code range, fetching and reporting each pin code
/// 4. Logs a closing summary
///
/// # Errors
///
/// Returns an error if the pin code or date is malformed or concurrency is
/// zero. Per-pin-code fetch and parse failures are reported and absorbed;
/// the process still exits successfully after a completed scan.
///
pub async fn cli() -> AppResult<()> {
    let matches = build_command().get_matches();

    let verbose = matches.get_flag("verbose");
    logging::init(verbose);

    let (query, concurrency) = resolve_query(&matches)?;
    debug!(?query, concurrency, "Resolved query");

    print_banner(&query);

    let client = reqwest::Client::new();
    let summary = scanner::scan_pincodes(&client, CALENDAR_BY_PIN_URL, &query, concurrency).await?;

    info!(
        scanned = summary.scanned,
        failed = summary.failed,
        total_available = summary.total_available,
        "Scan completed"
    );

    Ok(())
}

/// Builds the clap command definition.
pub(crate) fn build_command() -> Command<'static> {
    Command::new("cowin-cli")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .after_help(
            "Example:\n  cowin-cli -p 560011 -d 04-05-2021 -v cs --show-all",
        )
        .arg(
            Arg::new("pincode")
                .short('p')
                .long("pincode")
                .help(PINCODE_HELP_TEXT)
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("date")
                .short('d')
                .long("date")
                .help("Date in dd-mm-yyyy format (defaults to today)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("vaccine")
                .short('v')
                .long("vaccine")
                .help("Vaccine filter: 'covishield' (cs) or 'covaxin' (cx); anything else means no filter")
                .default_value("any")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("min_age")
                .short('a')
                .long("min-age")
                .help("Only report sessions with this exact minimum age; 0 disables the filter")
                .value_parser(clap::value_parser!(u16))
                .default_value("0")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("show_all")
                .short('f')
                .long("show-all")
                .help("Also print sessions with zero availability")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("announce_empty")
                .long("announce-empty")
                .help("Print the per-pin-code no-availability notice even without --show-all")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("scan_range")
                .short('i')
                .long("scan-range")
                .help("Scan 125 successive pin codes starting at --pincode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("concurrency")
                .short('c')
                .long("concurrency")
                .help("Concurrent requests during a range scan (1 = strictly sequential)")
                .value_parser(clap::value_parser!(usize))
                .default_value("1")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('l')
                .long("verbose")
                .help("Enable debug logs (echoes each request URL)")
                .action(ArgAction::SetTrue),
        )
}

/// Resolves parsed arguments into an immutable [`Query`] plus the scan
/// concurrency, applying the documented defaults: today's date, no vaccine
/// filter, no age filter.
pub(crate) fn resolve_query(matches: &ArgMatches) -> AppResult<(Query, usize)> {
    let pincode = matches
        .get_one::<String>("pincode")
        .expect("pincode is required")
        .clone();
    validate_pincode(&pincode)?;

    let date = match matches.get_one::<String>("date") {
        Some(date) => {
            validate_date(date)?;
            date.clone()
        }
        None => Local::now().format(DATE_FORMAT).to_string(),
    };

    let vaccine = VaccineFilter::from(
        matches
            .get_one::<String>("vaccine")
            .expect("vaccine has default_value")
            .as_str(),
    );

    let min_age = *matches
        .get_one::<u16>("min_age")
        .expect("min_age has default_value");

    let concurrency = *matches
        .get_one::<usize>("concurrency")
        .expect("concurrency has default_value");
    if concurrency == 0 {
        return Err(AppError::InvalidInput(
            "Concurrency must be greater than 0".into(),
        ));
    }

    let query = Query {
        pincode,
        date,
        vaccine,
        min_age,
        show_all: matches.get_flag("show_all"),
        announce_empty: matches.get_flag("announce_empty"),
        range_scan: matches.get_flag("scan_range"),
    };

    Ok((query, concurrency))
}

/// Validates that a pin code is a non-empty string of ASCII digits small
/// enough to iterate from.
fn validate_pincode(pincode: &str) -> AppResult<()> {
    if pincode.is_empty() {
        return Err(AppError::InvalidInput(
            "Pincode must not be empty".to_string(),
        ));
    }
    if !pincode.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidInput(format!(
            "Pincode must contain only digits, got: {pincode}"
        )));
    }
    if pincode.parse::<u32>().is_err() {
        return Err(AppError::InvalidInput(format!(
            "Pincode is out of range: {pincode}"
        )));
    }
    Ok(())
}

/// Validates a dd-mm-yyyy date by round-tripping it through [`NaiveDate`].
///
/// Formatting the parsed date must reproduce the input exactly, which
/// rejects shorthand like `4-5-2021` that the parser alone would accept.
fn validate_date(date: &str) -> AppResult<()> {
    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|e| AppError::InvalidInput(format!("Date must be dd-mm-yyyy, got {date}: {e}")))?;

    if parsed.format(DATE_FORMAT).to_string() != date {
        return Err(AppError::InvalidInput(format!(
            "Date must be zero-padded dd-mm-yyyy, got: {date}"
        )));
    }
    Ok(())
}

/// Prints the one-time banner summarizing the resolved query.
fn print_banner(query: &Query) {
    let span = if query.range_scan { RANGE_SCAN_SPAN } else { 1 };
    println!("{}", "=".repeat(86));
    println!(
        "Checking availability for Pincode={} Date={} Age={}+ Vaccine={} Pincodes={}",
        query.pincode,
        query.date,
        query.min_age,
        query.vaccine.display_name(),
        span
    );
    println!("{}", "=".repeat(86));
}
