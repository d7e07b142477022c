use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which date window the graph covers.
///
/// One layout engine serves both variants; this value object carries
/// everything that differs between them — window arithmetic lives in the
/// window service, while the shading range, empty-color pair and caption
/// set are answered here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowPolicy {
    /// Jan 1 – Dec 31 of the reference year, with year and weekday captions.
    CalendarYear,
    /// The 365 days ending on the reference date; month captions only.
    Rolling365,
}

impl WindowPolicy {
    /// Shading range as `(offset, span)`: `percent = offset + intensity * span`.
    ///
    /// Calendar-year shades around the base color (−0.2…+0.2, mild
    /// contrast); rolling darkens only (−0.6…0.0). The two ranges are
    /// intentionally different and stay selectable per policy.
    #[must_use]
    pub fn shade_range(&self) -> (f64, f64) {
        match self {
            WindowPolicy::CalendarYear => (-0.2, 0.4),
            WindowPolicy::Rolling365 => (-0.6, 0.6),
        }
    }

    /// Empty-cell color for the given theme.
    ///
    /// Per-policy literal constants, not derived from the base color.
    /// The calendar-year dark value carries an alpha channel.
    #[must_use]
    pub fn empty_color(&self, theme_is_dark: bool) -> &'static str {
        match (self, theme_is_dark) {
            (WindowPolicy::CalendarYear, false) => "#f0f0f0",
            (WindowPolicy::CalendarYear, true) => "#94949480",
            (WindowPolicy::Rolling365, false) => "#ebedf0",
            (WindowPolicy::Rolling365, true) => "#161b22",
        }
    }

    /// Weekday captions (Mon/Wed/Fri) appear on the calendar-year variant only.
    #[must_use]
    pub fn shows_day_labels(&self) -> bool {
        matches!(self, WindowPolicy::CalendarYear)
    }

    /// The four-digit year caption appears on the calendar-year variant only.
    #[must_use]
    pub fn shows_year_label(&self) -> bool {
        matches!(self, WindowPolicy::CalendarYear)
    }
}

impl std::fmt::Display for WindowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowPolicy::CalendarYear => write!(f, "calendar-year"),
            WindowPolicy::Rolling365 => write!(f, "rolling-365"),
        }
    }
}

/// The contiguous date range one render covers, and its grid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// The policy that planned this window.
    pub policy: WindowPolicy,

    /// First day of the window (inclusive).
    pub start: NaiveDate,

    /// Last day of the window. Iteration includes it for both policies.
    pub end: NaiveDate,

    /// Day count driving the week count. Calendar-year counts `end`
    /// inclusively (+1); rolling-365 counts `end - start` without the +1
    /// even though the end day is still iterated. The asymmetry is
    /// observed behavior and is kept as-is.
    pub total_days: i64,

    /// Number of week columns: `ceil(total_days / 7)`.
    pub weeks: u32,
}
