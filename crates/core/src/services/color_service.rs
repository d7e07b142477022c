use chrono::NaiveDate;
use std::collections::HashMap;

use crate::errors::GraphError;
use crate::models::color::Rgb;
use crate::models::window::WindowPolicy;

/// Maps day totals, relative to the window's maximum, to concrete fills.
pub struct ColorService {
    base: Rgb,
}

impl ColorService {
    /// Build a mapper around a `#RRGGBB` base color literal.
    pub fn new(base_color: &str) -> Result<Self, GraphError> {
        Ok(Self {
            base: Rgb::parse(base_color)?,
        })
    }

    /// The dataset maximum, floored at 1.
    ///
    /// The floor rules out division by zero; an all-zero dataset still
    /// renders fully "empty" because a zero total always takes the empty
    /// color before intensity is consulted.
    #[must_use]
    pub fn max_total(buckets: &HashMap<NaiveDate, f64>) -> f64 {
        buckets.values().fold(1.0_f64, |acc, total| acc.max(*total))
    }

    /// Shade the base color for a day's total within the policy's range.
    ///
    /// Intensity is clamped to [0, 1]: totals never exceed `max_total` by
    /// construction, and negative totals pin to the range's dark end.
    #[must_use]
    pub fn fill(&self, total: f64, max_total: f64, policy: WindowPolicy) -> Rgb {
        let intensity = (total / max_total).clamp(0.0, 1.0);
        let (offset, span) = policy.shade_range();
        self.base.shade(offset + intensity * span)
    }

    /// Empty-cell color for the policy/theme pair.
    ///
    /// The theme flag is injected by the caller — the core never polls a
    /// platform theme API.
    #[must_use]
    pub fn empty_color(policy: WindowPolicy, theme_is_dark: bool) -> &'static str {
        policy.empty_color(theme_is_dark)
    }
}
