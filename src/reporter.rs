use crate::errors::{AppError, AppResult};
use crate::models::{Center, CenterList, Query, Session};

/// Report assembled for a single pin code.
///
/// Lines are buffered rather than printed on the spot so a range scan can
/// flush them in pin-code order regardless of how the fetches ran.
#[derive(Debug)]
pub struct PincodeReport {
    pub pincode: String,
    pub lines: Vec<String>,
    /// Sum of available capacity across reported sessions
    pub total_available: u32,
    /// Whether any session with availability survived the filters
    pub found: bool,
}

/// Parses a raw response body into the center list.
///
/// A missing `centers` key, missing nested fields, or a body that is not
/// JSON at all surface as [`AppError::MalformedResponse`] rather than a
/// panic.
pub fn parse_centers(body: &str) -> AppResult<Vec<Center>> {
    let list: CenterList =
        serde_json::from_str(body).map_err(|e| AppError::MalformedResponse(e.to_string()))?;
    Ok(list.centers)
}

/// Walks the centers for one pin code and assembles its report.
///
/// Sessions are visited in array order, never re-sorted. A session that
/// fails the min-age or vaccine filter ends the walk of that center's
/// remaining sessions, not just the session itself; the original tool
/// behaves this way and the quirk is kept as-is.
pub fn build_report(query: &Query, pincode: &str, centers: &[Center]) -> PincodeReport {
    let mut report = PincodeReport {
        pincode: pincode.to_string(),
        lines: Vec::new(),
        total_available: 0,
        found: false,
    };

    for center in centers {
        for session in &center.sessions {
            if query.min_age != 0 && session.min_age_limit != query.min_age {
                break;
            }
            if !query.vaccine.matches(&session.vaccine) {
                break;
            }

            if session.available_capacity > 0 {
                report.found = true;
                report.total_available += session.available_capacity;
                report
                    .lines
                    .push(format_session_line(pincode, &center.name, session));
            } else if query.show_all {
                report
                    .lines
                    .push(format_session_line(pincode, &center.name, session));
            }
        }
    }

    if report.found {
        report.lines.push(format!(
            "PinCode: {} Total available: {}",
            pincode, report.total_available
        ));
    } else if query.show_all || query.announce_empty {
        report.lines.push(format!(
            "PinCode: {pincode} ** No availability at any center **"
        ));
    }

    report
}

fn format_session_line(pincode: &str, center_name: &str, session: &Session) -> String {
    format!(
        "PinCode: {} | Center: {:<25} | MinAge: {:<2} | Availability: {:<3} | Vaccine: {}",
        pincode, center_name, session.min_age_limit, session.available_capacity, session.vaccine
    )
}

/// Prints a finished report to stdout, one blank-line-separated entry per
/// line, matching the layout users of the original tool expect.
pub fn render(report: &PincodeReport) {
    for line in &report.lines {
        println!("\n{line}");
    }
}
