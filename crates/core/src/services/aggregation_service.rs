use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::HashMap;

use crate::errors::GraphError;
use crate::models::event::Event;

/// Reduces raw activity records into per-calendar-day totals.
///
/// Pure and deterministic: the input is never mutated and summation order
/// does not matter. A single malformed timestamp fails the whole pass —
/// skipping records would silently misrepresent totals.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Sum event amounts into day buckets.
    ///
    /// Days without events simply have no entry; callers treat absence
    /// as zero. NaN amounts are not guarded and poison their day's total.
    pub fn aggregate(&self, events: &[Event]) -> Result<HashMap<NaiveDate, f64>, GraphError> {
        let mut buckets: HashMap<NaiveDate, f64> = HashMap::new();
        for event in events {
            let day = parse_day(&event.occurred_at)?;
            *buckets.entry(day).or_insert(0.0) += event.amount;
        }
        Ok(buckets)
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate a timestamp to its calendar day in the timestamp's own offset.
/// There is no cross-event timezone normalization — callers must supply
/// comparable timestamps.
fn parse_day(timestamp: &str) -> Result<NaiveDate, GraphError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
        .map_err(|_| GraphError::InvalidTimestamp(timestamp.to_string()))
}
