use crate::errors::{AppError, AppResult};
use tracing::debug;
use url::Url;

/// Builds the calendarByPin request URL for one pin code and date.
///
/// The endpoint is passed in rather than hardcoded so that tests can point
/// the fetcher at a local server; production callers use
/// [`crate::constants::CALENDAR_BY_PIN_URL`].
pub fn build_request_url(endpoint: &str, pincode: &str, date: &str) -> AppResult<Url> {
    let mut url = Url::parse(endpoint)?;
    url.query_pairs_mut()
        .append_pair("pincode", pincode)
        .append_pair("date", date);
    Ok(url)
}

/// Fetches the raw session calendar for one pin code.
///
/// Performs a single unauthenticated GET with no custom headers. The
/// response body is returned as-is on HTTP 200; any non-success status maps
/// to [`AppError::RequestFailed`] carrying the observed status. No retry is
/// attempted.
///
/// # Errors
///
/// Returns an error if:
/// - The endpoint cannot be parsed as a URL
/// - The request fails at the transport level
/// - The API answers with a non-success status
///
pub async fn fetch_availability(
    client: &reqwest::Client,
    endpoint: &str,
    pincode: &str,
    date: &str,
) -> AppResult<String> {
    let url = build_request_url(endpoint, pincode, date)?;
    debug!(url = %url, "Sending availability request");

    let response = client.get(url.as_str()).send().await?;

    // Check status ourselves instead of error_for_status so the numeric
    // status survives into the error.
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::RequestFailed {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::build_request_url;

    #[test]
    fn test_build_request_url_appends_query_params() {
        let url = build_request_url("https://example.com/calendarByPin", "560011", "04-05-2021")
            .expect("url builds");

        assert_eq!(
            url.as_str(),
            "https://example.com/calendarByPin?pincode=560011&date=04-05-2021"
        );
    }

    #[test]
    fn test_build_request_url_preserves_endpoint_path() {
        let url = build_request_url(
            "https://cdn-api.co-vin.in/api/v2/appointment/sessions/public/calendarByPin",
            "110001",
            "01-06-2021",
        )
        .expect("url builds");

        assert_eq!(
            url.path(),
            "/api/v2/appointment/sessions/public/calendarByPin"
        );
        assert_eq!(
            url.query(),
            Some("pincode=110001&date=01-06-2021")
        );
    }

    #[test]
    fn test_build_request_url_invalid_endpoint() {
        let result = build_request_url("not a url", "560011", "04-05-2021");
        assert!(result.is_err());
    }
}
