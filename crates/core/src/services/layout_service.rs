use chrono::{Datelike, Days, NaiveDate};
use std::collections::HashMap;

use crate::models::options::GraphOptions;
use crate::models::plan::{Cell, DrawPlan, Label};
use crate::models::window::{Window, WindowPolicy};
use crate::services::color_service::ColorService;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday rows that receive a caption (Mon, Wed, Fri).
const CAPTIONED_ROWS: [usize; 3] = [1, 3, 5];

/// Fixed left gutter hosting the weekday captions (calendar-year variant).
const DAY_LABELS_WIDTH: f64 = 30.0;
/// Fixed band above the grid hosting the month captions (calendar-year variant).
const MONTH_LABELS_HEIGHT: f64 = 20.0;

/// Left edge of the weekday captions.
const DAY_LABEL_X: f64 = 5.0;

/// Corner radius of each cell square.
const CORNER_RADIUS: f64 = 2.0;

const CAPTION_FONT_SIZE: f64 = 10.0;
const YEAR_FONT_SIZE: f64 = 12.0;

/// Assigns each calendar day to a (week-column, weekday-row) cell,
/// resolves pixel geometry, and places the caption set for the window's
/// policy.
pub struct LayoutService;

impl LayoutService {
    pub fn new() -> Self {
        Self
    }

    /// Produce the full draw plan for one render.
    pub fn layout(
        &self,
        window: &Window,
        buckets: &HashMap<NaiveDate, f64>,
        colors: &ColorService,
        options: &GraphOptions,
        theme_is_dark: bool,
    ) -> DrawPlan {
        let step = options.step();
        let frame = Frame::for_policy(window.policy, options);
        let max_total = ColorService::max_total(buckets);
        let empty = ColorService::empty_color(window.policy, theme_is_dark);

        // Walk the grid column by column starting at the window start.
        // Once the date passes the window end the remaining slots stay
        // allocated in the grid but no cell is emitted for them.
        let mut cells = Vec::new();
        let mut day = Some(window.start);
        'grid: for column in 0..window.weeks {
            for row in 0..7u32 {
                let Some(date) = day else { break 'grid };
                if date > window.end {
                    break 'grid;
                }
                let total = buckets.get(&date).copied().unwrap_or(0.0);
                let fill_color = if total == 0.0 {
                    empty.to_string()
                } else {
                    colors.fill(total, max_total, window.policy).to_hex()
                };
                cells.push(Cell {
                    date,
                    total,
                    column,
                    row,
                    x: frame.origin_x + f64::from(column) * step,
                    y: frame.origin_y + f64::from(row) * step,
                    fill_color,
                });
                day = date.succ_opt();
            }
        }

        let day_labels = if window.policy.shows_day_labels() {
            self.day_labels(&frame, options)
        } else {
            Vec::new()
        };
        let year_label = window.policy.shows_year_label().then(|| Label {
            text: window.start.year().to_string(),
            x: options.padding,
            y: options.padding - 5.0,
            font_size: YEAR_FONT_SIZE,
            bold: true,
        });

        DrawPlan {
            cells,
            month_labels: self.month_labels(window, &frame, step),
            day_labels,
            year_label,
            canvas_width: frame.width(window.weeks, step),
            canvas_height: frame.height(step),
            square_size: options.square_size,
            corner_radius: CORNER_RADIUS,
            empty_color_light: ColorService::empty_color(window.policy, false).to_string(),
            empty_color_dark: ColorService::empty_color(window.policy, true).to_string(),
        }
    }

    /// One caption per month change, sampling the first day of each week
    /// column. A caption lands on the column where the sampled month first
    /// differs from the previous column's sample — a weekly-sampling
    /// approximation, not "every 1st of the month".
    fn month_labels(&self, window: &Window, frame: &Frame, step: f64) -> Vec<Label> {
        let mut labels = Vec::new();
        let mut previous_month = 0u32; // calendar months are 1-based
        let mut sample = Some(window.start);
        for column in 0..window.weeks {
            let Some(date) = sample else { break };
            let month = date.month();
            if month != previous_month {
                labels.push(Label {
                    text: MONTH_NAMES[(month - 1) as usize].to_string(),
                    x: frame.origin_x + f64::from(column) * step,
                    y: frame.month_label_y,
                    font_size: CAPTION_FONT_SIZE,
                    bold: false,
                });
                previous_month = month;
            }
            sample = date.checked_add_days(Days::new(7));
        }
        labels
    }

    fn day_labels(&self, frame: &Frame, options: &GraphOptions) -> Vec<Label> {
        CAPTIONED_ROWS
            .iter()
            .map(|&row| Label {
                text: DAY_NAMES[row].to_string(),
                x: DAY_LABEL_X,
                y: frame.origin_y
                    + row as f64 * options.step()
                    + options.square_size / 2.0
                    + 3.0,
                font_size: CAPTION_FONT_SIZE,
                bold: false,
            })
            .collect()
    }
}

impl Default for LayoutService {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-policy frame metrics: where the grid originates and how much
/// padding and gutter space surrounds it.
struct Frame {
    origin_x: f64,
    origin_y: f64,
    month_label_y: f64,
    horizontal_padding: f64,
    vertical_padding: f64,
}

impl Frame {
    fn for_policy(policy: WindowPolicy, options: &GraphOptions) -> Self {
        let p = options.padding;
        match policy {
            // Fixed gutters host the weekday and month captions.
            WindowPolicy::CalendarYear => Self {
                origin_x: p + DAY_LABELS_WIDTH,
                origin_y: p + MONTH_LABELS_HEIGHT,
                month_label_y: p + 10.0,
                horizontal_padding: p * 2.0 + DAY_LABELS_WIDTH,
                vertical_padding: p * 2.0 + MONTH_LABELS_HEIGHT,
            },
            // No gutters; doubled top padding hosts the month captions.
            WindowPolicy::Rolling365 => Self {
                origin_x: p,
                origin_y: p * 2.0,
                month_label_y: p + 10.0,
                horizontal_padding: p * 2.0,
                vertical_padding: p * 3.0,
            },
        }
    }

    fn width(&self, weeks: u32, step: f64) -> f64 {
        f64::from(weeks) * step + self.horizontal_padding
    }

    fn height(&self, step: f64) -> f64 {
        7.0 * step + self.vertical_padding
    }
}
