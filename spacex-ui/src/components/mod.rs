//! Dioxus RSX components for the dashboard page.

mod dash_graph;
mod dash_heading;
mod payload_range_slider;
mod site_selector;

pub use dash_graph::DashGraph;
pub use dash_heading::DashHeading;
pub use payload_range_slider::PayloadRangeSlider;
pub use site_selector::SiteSelector;
