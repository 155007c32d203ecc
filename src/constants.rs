// Public CoWIN appointment API
pub const CALENDAR_BY_PIN_URL: &str =
    "https://cdn-api.co-vin.in/api/v2/appointment/sessions/public/calendarByPin";

// Dates on the CLI and on the wire use the same dd-mm-yyyy form
pub const DATE_FORMAT: &str = "%d-%m-%Y";

// Pin code help text
pub const PINCODE_HELP_TEXT: &str = "Pin code to check (starting pin code with --scan-range)";

// Number of successive pin codes covered by a range scan
pub const RANGE_SCAN_SPAN: u32 = 125;

// Vaccine filter aliases
pub const COVISHIELD_ALIASES: &[&str] = &["covishield", "cs"];
pub const COVAXIN_ALIASES: &[&str] = &["covaxin", "cx"];
