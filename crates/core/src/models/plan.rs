use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::GraphError;

/// One drawable day square with its resolved grid position and fill.
///
/// Cells are derived fresh on every render and discarded after the draw
/// pass; nothing holds on to them across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// The calendar day this square represents.
    pub date: NaiveDate,

    /// Aggregated activity for that day (0 when no event landed on it).
    pub total: f64,

    /// Week column, 0-based from the window start.
    pub column: u32,

    /// Weekday row 0–6. Row 0 is the window's start day; the Sun..Sat
    /// caption rows assume a Sunday-start window.
    pub row: u32,

    /// Left edge in canvas pixels.
    pub x: f64,

    /// Top edge in canvas pixels.
    pub y: f64,

    /// Resolved fill: an intensity shade of the base color, or the
    /// selected theme's empty color when the total is exactly zero.
    pub fill_color: String,
}

impl Cell {
    /// Hover caption for this square: `"<total> activity on <date>"`.
    #[must_use]
    pub fn tooltip_text(&self) -> String {
        format!("{} activity on {}", self.total, self.date.format("%Y-%m-%d"))
    }
}

/// A text caption (month, weekday or year) at a fixed canvas position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,

    /// Font size in pixels.
    pub font_size: f64,

    /// Bold weight (the year caption only).
    pub bold: bool,
}

/// The complete, self-contained draw-command set for one render.
///
/// The core computes all of this — a drawing collaborator only replays
/// it. See `render::DrawSurface` for the replay seam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawPlan {
    /// Day squares in grid order (column-major, top to bottom).
    pub cells: Vec<Cell>,

    /// One caption per month change across the week columns.
    pub month_labels: Vec<Label>,

    /// Mon/Wed/Fri captions in the left gutter (calendar-year only).
    pub day_labels: Vec<Label>,

    /// Four-digit year caption, top-left (calendar-year only).
    pub year_label: Option<Label>,

    pub canvas_width: f64,
    pub canvas_height: f64,

    /// Side of each cell square, in pixels.
    pub square_size: f64,

    /// Corner radius for the rounded cell rectangles.
    pub corner_radius: f64,

    /// Empty-cell colors for both themes. The cells already carry a
    /// resolved fill; a collaborator watching a live dark-mode signal can
    /// restyle empty cells from this pair without asking for a new plan.
    pub empty_color_light: String,
    pub empty_color_dark: String,
}

impl DrawPlan {
    /// Serialize for a collaborator living across a JSON boundary.
    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string(self)?)
    }
}
