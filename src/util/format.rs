/// The text shown in place of a result when anything goes wrong.
pub const ERROR_MARKER: &str = "Error";

/// Formats a number the way results are shown to users.
///
/// Uses the shortest representation that parses back to the same value, and
/// always shows a fractional part or exponent so results read as real
/// numbers.
///
/// # Example
/// ```
/// use reckon::util::format::format_number;
///
/// assert_eq!(format_number(14.0), "14.0");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(std::f64::consts::PI), "3.141592653589793");
/// assert_eq!(format_number(1e20), "1e20");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}
