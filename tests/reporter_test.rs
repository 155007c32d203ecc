//! Tests for the reporter module against the shared payload fixtures

mod common;

use common::{
    plain_query, EMPTY_CENTERS_RESPONSE, MISSING_CENTERS_RESPONSE, MULTI_CENTER_RESPONSE,
    NO_AVAILABILITY_RESPONSE, SINGLE_SESSION_RESPONSE,
};
use cowin_cli::models::VaccineFilter;
use cowin_cli::reporter::{build_report, parse_centers};

#[test]
fn test_single_open_session_yields_one_line_and_tally_of_three() {
    let centers = parse_centers(SINGLE_SESSION_RESPONSE).unwrap();
    let report = build_report(&plain_query("560027"), "560027", &centers);

    assert!(report.found);
    assert_eq!(report.total_available, 3);
    assert_eq!(report.lines.len(), 2);
    assert_eq!(
        report.lines[0],
        "PinCode: 560027 | Center: APOLLO CRADLE HOSPITAL    | MinAge: 45 | Availability: 3   | Vaccine: COVISHIELD"
    );
    assert_eq!(report.lines[1], "PinCode: 560027 Total available: 3");
}

#[test]
fn test_zero_capacity_without_show_all_yields_only_the_notice() {
    let centers = parse_centers(NO_AVAILABILITY_RESPONSE).unwrap();
    let mut query = plain_query("560011");
    query.announce_empty = true;

    let report = build_report(&query, "560011", &centers);

    assert!(!report.found);
    assert_eq!(report.lines.len(), 1);
    assert_eq!(
        report.lines[0],
        "PinCode: 560011 ** No availability at any center **"
    );
}

#[test]
fn test_show_all_includes_zero_capacity_sessions() {
    let centers = parse_centers(MULTI_CENTER_RESPONSE).unwrap();
    let mut query = plain_query("560011");
    query.show_all = true;

    let report = build_report(&query, "560011", &centers);

    assert!(report.found);
    // Two open sessions, one closed session, one tally line
    assert_eq!(report.lines.len(), 4);
    assert_eq!(report.total_available, 6);
}

#[test]
fn test_min_age_filter_excludes_session_and_rest_of_center() {
    let centers = parse_centers(MULTI_CENTER_RESPONSE).unwrap();
    let mut query = plain_query("560011");
    query.min_age = 60;

    let report = build_report(&query, "560011", &centers);

    // Every center opens with a non-60 session, so nothing is reported
    assert!(!report.found);
    assert_eq!(report.total_available, 0);
}

#[test]
fn test_vaccine_filter_keeps_only_exact_matches() {
    let centers = parse_centers(MULTI_CENTER_RESPONSE).unwrap();
    let mut query = plain_query("560011");
    query.vaccine = VaccineFilter::Covishield;

    let report = build_report(&query, "560011", &centers);

    // First center opens with a COVAXIN session, stopping its walk;
    // the second center's COVISHIELD session is still reported.
    assert!(report.found);
    assert_eq!(report.total_available, 4);
}

#[test]
fn test_empty_center_list_with_defaults_prints_nothing() {
    let centers = parse_centers(EMPTY_CENTERS_RESPONSE).unwrap();
    let report = build_report(&plain_query("560011"), "560011", &centers);

    assert!(report.lines.is_empty());
    assert_eq!(report.total_available, 0);
}

#[test]
fn test_missing_centers_key_is_malformed() {
    assert!(parse_centers(MISSING_CENTERS_RESPONSE).is_err());
}
