pub mod errors;
pub mod models;
pub mod render;
pub mod services;

use chrono::NaiveDate;
use std::collections::HashMap;

use errors::GraphError;
use models::{event::Event, options::GraphOptions, plan::DrawPlan, window::WindowPolicy};
use services::{
    aggregation_service::AggregationService, color_service::ColorService,
    layout_service::LayoutService, window_service::WindowService,
};

/// Main entry point for the contribution-graph core library.
/// Holds the event list and the services that turn it into draw plans.
#[must_use]
pub struct ContributionGraph {
    events: Vec<Event>,
    policy: WindowPolicy,
    options: GraphOptions,
    aggregation_service: AggregationService,
    window_service: WindowService,
    layout_service: LayoutService,
}

impl std::fmt::Debug for ContributionGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContributionGraph")
            .field("events", &self.events.len())
            .field("policy", &self.policy)
            .field("options", &self.options)
            .finish()
    }
}

impl ContributionGraph {
    /// Create a graph over a set of raw activity records with default
    /// options. The policy is the variant selected for the lifetime of
    /// this graph; there is one engine, parameterized, not two.
    pub fn new(events: Vec<Event>, policy: WindowPolicy) -> Self {
        Self::with_options(events, policy, GraphOptions::default())
    }

    /// Create a graph with custom geometry/color options.
    ///
    /// Options are not validated here; a bad base color surfaces as
    /// `InvalidColor` from `render`, before any cell is produced.
    pub fn with_options(events: Vec<Event>, policy: WindowPolicy, options: GraphOptions) -> Self {
        Self {
            events,
            policy,
            options,
            aggregation_service: AggregationService::new(),
            window_service: WindowService::new(),
            layout_service: LayoutService::new(),
        }
    }

    // ── Rendering ───────────────────────────────────────────────────

    /// Compute the full draw plan around a reference date.
    ///
    /// Pure: identical inputs produce identical plans — there is no
    /// hidden clock, "today" is always supplied by the caller. The theme
    /// flag selects which empty color lands on the cells; both theme
    /// colors additionally ride along on the plan.
    pub fn render(
        &self,
        reference_date: NaiveDate,
        theme_is_dark: bool,
    ) -> Result<DrawPlan, GraphError> {
        // Fail fast on a bad base color before any aggregation work.
        let colors = ColorService::new(&self.options.color)?;
        let buckets = self.aggregation_service.aggregate(&self.events)?;
        let window = self.window_service.plan(self.policy, reference_date)?;

        // One-time keyframe registration, lazily on the first render.
        render::style::stylesheet();

        Ok(self
            .layout_service
            .layout(&window, &buckets, &colors, &self.options, theme_is_dark))
    }

    /// Like `render`, but takes a raw year/month/day triple and rejects
    /// invalid calendar dates with `InvalidReferenceDate`.
    pub fn render_from_ymd(
        &self,
        year: i32,
        month: u32,
        day: u32,
        theme_is_dark: bool,
    ) -> Result<DrawPlan, GraphError> {
        self.render(
            services::window_service::resolve_ymd(year, month, day)?,
            theme_is_dark,
        )
    }

    // ── Inspection ──────────────────────────────────────────────────

    /// Per-day totals without a layout pass.
    pub fn day_totals(&self) -> Result<HashMap<NaiveDate, f64>, GraphError> {
        self.aggregation_service.aggregate(&self.events)
    }

    /// The events backing this graph, in the order supplied.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The window policy selected at construction.
    #[must_use]
    pub fn policy(&self) -> WindowPolicy {
        self.policy
    }
}
