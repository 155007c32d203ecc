use crate::constants::RANGE_SCAN_SPAN;
use crate::errors::{AppError, AppResult};
use crate::fetcher;
use crate::models::Query;
use crate::reporter::{self, PincodeReport};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::warn;

/// Outcome of a full scan, for the closing summary log.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Pin codes visited, including failed ones
    pub scanned: u32,
    /// Pin codes whose fetch or parse failed
    pub failed: u32,
    /// Sum of per-pin-code tallies
    pub total_available: u32,
}

/// Computes the exclusive end of the pin-code range.
pub(crate) fn scan_end(start: u32, range_scan: bool) -> u32 {
    let span = if range_scan { RANGE_SCAN_SPAN } else { 1 };
    start.saturating_add(span)
}

/// Fetch-and-report step for one pin code.
async fn check_pincode(
    client: &reqwest::Client,
    endpoint: &str,
    query: &Query,
    pincode: &str,
) -> AppResult<PincodeReport> {
    let body = fetcher::fetch_availability(client, endpoint, pincode, &query.date).await?;
    let centers = reporter::parse_centers(&body)?;
    Ok(reporter::build_report(query, pincode, &centers))
}

fn record_failure(summary: &mut ScanSummary, pincode: &str, error: &AppError) {
    warn!(pincode = pincode, error = %error, "Skipping pin code after failure");
    eprintln!("PinCode: {pincode} lookup failed: {error}");
    summary.failed += 1;
}

/// Scans the pin-code range, fetching and reporting each pin code in turn.
///
/// The range is `[start, start + 1)` normally and
/// `[start, start + RANGE_SCAN_SPAN)` with `range_scan`. A failed pin code
/// is reported and the scan moves on; one pin code's failure never aborts
/// the rest of the range.
///
/// With `concurrency > 1` the fetches run under a semaphore-bounded set of
/// spawned tasks. Reports stay buffered per task and the join handles are
/// awaited in submission order, so output still appears in pin-code order.
///
/// # Errors
///
/// Returns an error only for invalid input (non-numeric pin code, zero
/// concurrency); per-pin-code fetch and parse failures are absorbed into
/// the summary.
pub async fn scan_pincodes(
    client: &reqwest::Client,
    endpoint: &str,
    query: &Query,
    concurrency: usize,
) -> AppResult<ScanSummary> {
    let start: u32 = query.pincode.parse().map_err(|_| {
        AppError::InvalidInput(format!("Pincode must be numeric, got: {}", query.pincode))
    })?;
    let end = scan_end(start, query.range_scan);

    if concurrency == 0 {
        return Err(AppError::InvalidInput(
            "Concurrency must be greater than 0".into(),
        ));
    }

    let mut summary = ScanSummary::default();

    if concurrency == 1 {
        for pin in start..end {
            let pincode = pin.to_string();
            match check_pincode(client, endpoint, query, &pincode).await {
                Ok(report) => {
                    reporter::render(&report);
                    summary.total_available += report.total_available;
                }
                Err(e) => record_failure(&mut summary, &pincode, &e),
            }
            summary.scanned += 1;
        }
        return Ok(summary);
    }

    // Bounded fan-out. Each task buffers its own report; awaiting the
    // handles in submission order keeps the output in pin-code order.
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let client = Arc::new(client.clone());
    let query = Arc::new(query.clone());
    let endpoint = Arc::new(endpoint.to_string());

    let mut handles: Vec<JoinHandle<AppResult<PincodeReport>>> =
        Vec::with_capacity((end - start) as usize);

    for pin in start..end {
        let semaphore = semaphore.clone();
        let client = client.clone();
        let query = query.clone();
        let endpoint = endpoint.clone();
        let pincode = pin.to_string();

        handles.push(tokio::spawn(async move {
            let _permit = semaphore
                .acquire()
                .await
                .map_err(|e| AppError::Runtime(format!("Failed to acquire scan permit: {e}")))?;
            check_pincode(&client, &endpoint, &query, &pincode).await
        }));
    }

    for (offset, handle) in handles.into_iter().enumerate() {
        let pincode = (start + offset as u32).to_string();
        match handle.await {
            Ok(Ok(report)) => {
                reporter::render(&report);
                summary.total_available += report.total_available;
            }
            Ok(Err(e)) => record_failure(&mut summary, &pincode, &e),
            Err(e) => record_failure(
                &mut summary,
                &pincode,
                &AppError::Runtime(format!("Scan task failed: {e}")),
            ),
        }
        summary.scanned += 1;
    }

    Ok(summary)
}
