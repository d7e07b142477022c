use chrono::{Datelike, Months, NaiveDate};

use crate::errors::GraphError;
use crate::models::window::{Window, WindowPolicy};

/// Computes the date range to display and its grid shape.
pub struct WindowService;

impl WindowService {
    pub fn new() -> Self {
        Self
    }

    /// Plan the window for a policy around a reference date.
    pub fn plan(
        &self,
        policy: WindowPolicy,
        reference_date: NaiveDate,
    ) -> Result<Window, GraphError> {
        let (start, end, total_days) = match policy {
            WindowPolicy::CalendarYear => {
                let year = reference_date.year();
                let start = NaiveDate::from_ymd_opt(year, 1, 1)
                    .ok_or_else(|| out_of_range(reference_date))?;
                let end = NaiveDate::from_ymd_opt(year, 12, 31)
                    .ok_or_else(|| out_of_range(reference_date))?;
                (start, end, (end - start).num_days() + 1)
            }
            WindowPolicy::Rolling365 => {
                // Calendar subtraction: day-of-month preserved where
                // possible, clamped at month ends (Feb 29 → Feb 28).
                let start = reference_date
                    .checked_sub_months(Months::new(12))
                    .ok_or_else(|| out_of_range(reference_date))?;
                // No +1 here: the end day is iterated but not counted.
                (start, reference_date, (reference_date - start).num_days())
            }
        };
        Ok(Window {
            policy,
            start,
            end,
            total_days,
            weeks: (total_days as u32).div_ceil(7),
        })
    }

    /// Plan from a raw year/month/day triple, rejecting invalid dates.
    pub fn plan_from_ymd(
        &self,
        policy: WindowPolicy,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Window, GraphError> {
        self.plan(policy, resolve_ymd(year, month, day)?)
    }
}

impl Default for WindowService {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a year/month/day triple into a calendar date.
pub fn resolve_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, GraphError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        GraphError::InvalidReferenceDate(format!("{year:04}-{month:02}-{day:02}"))
    })
}

fn out_of_range(reference_date: NaiveDate) -> GraphError {
    GraphError::InvalidReferenceDate(format!(
        "{reference_date} falls outside the representable date range"
    ))
}
