//! Graph region filled in by the renderer script.
//!
//! Each graph starts as a "Loading chart..." placeholder. The script removes
//! it once the first figure arrives and, when the server runs with
//! `--debug`, writes the render error behind a degraded figure into the
//! `.dash-graph-error` line below the plot.

use dioxus::prelude::*;
use spacex_charts::layout::Graph;

/// Plot height; Plotly sizes to the container width.
pub const GRAPH_HEIGHT_PX: u32 = 450;

#[derive(Props, Clone, PartialEq)]
pub struct DashGraphProps {
    pub graph: Graph,
}

#[component]
pub fn DashGraph(props: DashGraphProps) -> Element {
    let style = format!("min-height: {GRAPH_HEIGHT_PX}px; position: relative; width: 100%;");

    rsx! {
        div {
            class: "dash-graph-container",
            style: "{style}",
            div {
                class: "dash-graph-loading",
                style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                "Loading chart..."
            }
            div {
                id: "{props.graph.id}",
                class: "dash-graph",
                style: "width: 100%;",
            }
            p {
                class: "dash-graph-error",
                style: "color: #b00020; font-size: 0.9em; margin: 4px 0;",
                hidden: true,
            }
        }
    }
}
