//! Common test utilities for integration tests

use cowin_cli::models::{Query, VaccineFilter};

/// Builds a query with no filters for the given pin code
#[allow(dead_code)]
pub fn plain_query(pincode: &str) -> Query {
    Query {
        pincode: pincode.to_string(),
        date: "04-05-2021".to_string(),
        vaccine: VaccineFilter::Any,
        min_age: 0,
        show_all: false,
        announce_empty: false,
        range_scan: false,
    }
}

/// Payload with one center holding one open session (capacity 3)
#[allow(dead_code)]
pub const SINGLE_SESSION_RESPONSE: &str = r#"{
  "centers": [
    {
      "name": "APOLLO CRADLE HOSPITAL",
      "sessions": [
        { "min_age_limit": 45, "available_capacity": 3, "vaccine": "COVISHIELD" }
      ]
    }
  ]
}"#;

/// Payload with two centers and mixed availability
#[allow(dead_code)]
pub const MULTI_CENTER_RESPONSE: &str = r#"{
  "centers": [
    {
      "name": "Jayanagara Dispensary",
      "sessions": [
        { "min_age_limit": 45, "available_capacity": 0, "vaccine": "COVAXIN" },
        { "min_age_limit": 18, "available_capacity": 2, "vaccine": "COVISHIELD" }
      ]
    },
    {
      "name": "Shanthinagar UPHC",
      "sessions": [
        { "min_age_limit": 45, "available_capacity": 4, "vaccine": "COVISHIELD" }
      ]
    }
  ]
}"#;

/// Payload with centers but no open sessions
#[allow(dead_code)]
pub const NO_AVAILABILITY_RESPONSE: &str = r#"{
  "centers": [
    {
      "name": "SHANTHI NAGAR UPHC C1",
      "sessions": [
        { "min_age_limit": 45, "available_capacity": 0, "vaccine": "COVISHIELD" }
      ]
    }
  ]
}"#;

/// Payload with no centers at all
#[allow(dead_code)]
pub const EMPTY_CENTERS_RESPONSE: &str = r#"{ "centers": [] }"#;

/// Payload missing the expected top-level `centers` key
#[allow(dead_code)]
pub const MISSING_CENTERS_RESPONSE: &str = r#"{ "sessions": [] }"#;
