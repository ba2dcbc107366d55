/// Lowest accepted beer rating
pub const MIN_RATING: i32 = 0;

/// Highest accepted beer rating
pub const MAX_RATING: i32 = 10;

/// Canonical calendar-date form used on the wire
pub const DATE_FORMAT: &str = "%Y-%m-%d";
