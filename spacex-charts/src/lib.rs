//! Layout, chart handlers and callback wiring for the SpaceX launch dashboard.
//!
//! This crate provides:
//! - `layout`: the static widget tree built from the loaded table
//! - `handlers`: the success pie chart and payload/outcome scatter chart
//! - `callbacks`: the observer map the host dispatches widget changes through
//! - `figure`: Plotly-shaped chart descriptions returned by the handlers

pub mod callbacks;
pub mod error;
pub mod figure;
pub mod handlers;
pub mod layout;

pub use callbacks::{CallbackRegistry, InputValue, PropRef};
pub use error::{DispatchError, RenderError};
pub use figure::Figure;
pub use handlers::Rendered;
pub use layout::{build_layout, DashLayout};
