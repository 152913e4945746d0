//! Dioxus components and browser renderer for the SpaceX launch dashboard.
//!
//! This crate provides:
//! - `components`: RSX components for each widget in the layout tree
//! - `page`: server-side rendering of the full dashboard page
//! - `assets`: the embedded browser script that wires widgets to callbacks

pub mod assets;
pub mod components;
pub mod page;

pub use page::render_page;
