/// Result formatting helpers.
///
/// Turns evaluated numbers into the text shown to users and defines the fixed
/// marker shown for every failure.
pub mod format;
