pub mod aggregation_service;
pub mod color_service;
pub mod layout_service;
pub mod window_service;
