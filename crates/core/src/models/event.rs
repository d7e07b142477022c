use serde::{Deserialize, Serialize};

/// A single raw activity record supplied by the caller.
///
/// The timestamp stays a string until aggregation parses it: the graph is
/// fed straight from whatever the host application recorded, and a
/// malformed record must fail the whole aggregation rather than be
/// silently skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// When the activity occurred. Accepted forms: RFC 3339
    /// (`2025-03-05T10:30:00Z`, offsets allowed), `YYYY-MM-DDTHH:MM:SS`,
    /// or a bare `YYYY-MM-DD` date.
    pub occurred_at: String,

    /// Magnitude of the activity. Zero and negative values are valid
    /// magnitudes, not filtered. NaN is not rejected and will poison the
    /// running total of the day it lands on.
    pub amount: f64,
}

impl Event {
    pub fn new(occurred_at: impl Into<String>, amount: f64) -> Self {
        Self {
            occurred_at: occurred_at.into(),
            amount,
        }
    }
}
