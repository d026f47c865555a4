//! Time formatting helpers.

use std::time::Duration;

/// Format an elapsed duration at millisecond resolution.
pub fn format_ms(elapsed: Duration) -> String {
    format!("{} ms", elapsed.as_millis())
}
