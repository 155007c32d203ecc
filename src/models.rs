use crate::constants::*;
use serde::Deserialize;

/// Vaccine filter applied to returned sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaccineFilter {
    Covishield,
    Covaxin,
    Any,
}

impl VaccineFilter {
    /// Returns the vaccine name as the API spells it.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Covishield => "COVISHIELD",
            Self::Covaxin => "COVAXIN",
            Self::Any => "Any",
        }
    }

    /// Case-exact comparison against the vaccine name reported by the API.
    /// `Any` matches every session.
    pub fn matches(&self, vaccine: &str) -> bool {
        match self {
            Self::Any => true,
            _ => self.display_name() == vaccine,
        }
    }
}

impl From<&str> for VaccineFilter {
    fn from(value: &str) -> Self {
        // Trim whitespace and compare case-insensitively
        let lower = value.trim().to_lowercase();

        if COVISHIELD_ALIASES.contains(&lower.as_str()) {
            Self::Covishield
        } else if COVAXIN_ALIASES.contains(&lower.as_str()) {
            Self::Covaxin
        } else {
            // Default silently to Any; callers can decide to log if needed.
            Self::Any
        }
    }
}

/// Resolved query for one run. Immutable once input resolution completes.
#[derive(Debug, Clone)]
pub struct Query {
    /// Starting pin code, digits only
    pub pincode: String,
    /// Target date in dd-mm-yyyy format
    pub date: String,
    pub vaccine: VaccineFilter,
    /// Exact minimum-age filter; 0 disables it
    pub min_age: u16,
    /// Also report sessions with zero availability
    pub show_all: bool,
    /// Print the no-availability notice even without `show_all`
    pub announce_empty: bool,
    /// Scan RANGE_SCAN_SPAN successive pin codes instead of one
    pub range_scan: bool,
}

/// Top-level payload returned by the calendarByPin endpoint.
#[derive(Debug, Deserialize)]
pub struct CenterList {
    pub centers: Vec<Center>,
}

/// One vaccination center, received verbatim from the API.
#[derive(Debug, Deserialize)]
pub struct Center {
    pub name: String,
    pub sessions: Vec<Session>,
}

/// One vaccine-dose time slot at a center.
#[derive(Debug, Deserialize)]
pub struct Session {
    pub min_age_limit: u16,
    pub available_capacity: u32,
    pub vaccine: String,
}
