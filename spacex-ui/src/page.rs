//! Server-side rendering of the dashboard page.
//!
//! The widget tree is walked once per page request and rendered to HTML with
//! `dioxus-ssr`. Charts start empty; the renderer script fills them in.

use crate::assets::{DASH_RENDERER_PATH, PLOTLY_CDN_URL};
use crate::components::{DashGraph, DashHeading, PayloadRangeSlider, SiteSelector};
use dioxus::prelude::*;
use spacex_charts::layout::{Component, DashLayout, DASHBOARD_TITLE};

#[derive(Props, Clone, PartialEq)]
pub struct DashboardPageProps {
    pub layout: DashLayout,
}

/// Root component: every layout child, top to bottom.
#[component]
pub fn DashboardPage(props: DashboardPageProps) -> Element {
    rsx! {
        div {
            id: "dash-app",
            style: "max-width: 1000px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",
            for child in props.layout.children.iter() {
                LayoutNode { component: child.clone() }
            }
        }
    }
}

#[component]
fn LayoutNode(component: Component) -> Element {
    match component {
        Component::Heading(heading) => rsx! {
            DashHeading { heading: heading }
        },
        Component::Dropdown(dropdown) => rsx! {
            SiteSelector { dropdown: dropdown }
        },
        Component::Graph(graph) => rsx! {
            DashGraph { graph: graph }
        },
        Component::Paragraph(paragraph) => rsx! {
            p { "{paragraph.text}" }
        },
        Component::RangeSlider(slider) => rsx! {
            PayloadRangeSlider { slider: slider }
        },
        Component::Break => rsx! {
            br {}
        },
    }
}

/// Render just the dashboard markup.
pub fn render_body(layout: &DashLayout) -> String {
    let mut dom = VirtualDom::new_with_props(
        DashboardPage,
        DashboardPageProps {
            layout: layout.clone(),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render the complete HTML document for the dashboard.
pub fn render_page(layout: &DashLayout) -> String {
    let body = render_body(layout);
    log::debug!("page: rendered {} bytes of markup", body.len());
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{DASHBOARD_TITLE}</title>
<script src="{PLOTLY_CDN_URL}"></script>
</head>
<body>
{body}
<script src="{DASH_RENDERER_PATH}"></script>
</body>
</html>
"#
    )
}
