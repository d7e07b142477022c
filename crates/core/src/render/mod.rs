pub mod style;
pub mod surface;

pub use surface::DrawSurface;
