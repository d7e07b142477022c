use serde::{Deserialize, Serialize};

/// Caller-configurable geometry and color knobs.
///
/// All four are independent linear scale factors on the output geometry;
/// there is no cross-validation between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphOptions {
    /// Side of one day square, in pixels.
    pub square_size: f64,

    /// Gap between adjacent squares, in pixels.
    pub square_gap: f64,

    /// Outer padding around the grid, in pixels.
    pub padding: f64,

    /// Base fill color as a `#RRGGBB` literal. Intensity shades derive
    /// from it; validated when a plan is rendered.
    pub color: String,
}

impl GraphOptions {
    /// Distance between the origins of adjacent squares on either axis.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.square_size + self.square_gap
    }
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            square_size: 12.0,
            square_gap: 3.0,
            padding: 25.0,
            color: "#3e3eff".to_string(),
        }
    }
}
