//! Browser-side assets served next to the rendered page.
//!
//! The renderer script is plain JS (no modules) embedded at compile time. It
//! reads `/_dash-dependencies`, listens for widget changes, posts the current
//! input values to `/_dash-update-component` and draws the returned figure
//! with Plotly.js, which the page loads from its CDN.

/// Renderer script source.
pub static DASH_RENDERER_JS: &str = include_str!("../assets/js/dash-renderer.js");

/// Path the host serves [`DASH_RENDERER_JS`] under.
pub const DASH_RENDERER_PATH: &str = "/assets/dash-renderer.js";

/// Plotly.js bundle loaded by the page.
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_script_is_embedded() {
        assert!(!DASH_RENDERER_JS.trim().is_empty());
    }

    #[test]
    fn renderer_script_targets_callback_endpoints() {
        for token in [
            "/_dash-dependencies",
            "/_dash-update-component",
            "Plotly.react",
            "dash-range-slider",
            "dash-graph-loading",
            "dash-graph-error",
        ] {
            assert!(
                DASH_RENDERER_JS.contains(token),
                "Expected token `{token}` missing from renderer script"
            );
        }
    }
}
