use crate::models::plan::{DrawPlan, Label};

/// The drawing collaborator's contract.
///
/// The core never touches a real canvas; it replays a `DrawPlan` against
/// whatever implements this trait — an SVG builder, a GUI painter, a test
/// recorder. If a backend changes, only that one implementation is
/// replaced. Tooltip wiring and animation timing stay on the
/// implementor's side.
pub trait DrawSurface {
    /// Size the drawing surface. Called once, before any draw command.
    fn begin(&mut self, width: f64, height: f64);

    /// Draw one day square as a rounded rectangle.
    fn fill_rounded_rect(&mut self, x: f64, y: f64, size: f64, corner_radius: f64, fill: &str);

    /// Draw one text caption.
    fn draw_text(&mut self, label: &Label);
}

impl DrawPlan {
    /// Replay the whole plan against a surface: size it, captions first
    /// (year, then months, then weekdays), then every day square in grid
    /// order.
    pub fn replay<S: DrawSurface>(&self, surface: &mut S) {
        surface.begin(self.canvas_width, self.canvas_height);
        if let Some(year) = &self.year_label {
            surface.draw_text(year);
        }
        for label in &self.month_labels {
            surface.draw_text(label);
        }
        for label in &self.day_labels {
            surface.draw_text(label);
        }
        for cell in &self.cells {
            surface.fill_rounded_rect(
                cell.x,
                cell.y,
                self.square_size,
                self.corner_radius,
                &cell.fill_color,
            );
        }
    }
}
