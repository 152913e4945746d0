//! Page heading component.

use dioxus::prelude::*;
use spacex_charts::layout::Heading;

#[derive(Props, Clone, PartialEq)]
pub struct DashHeadingProps {
    pub heading: Heading,
}

/// Dashboard title, styled from the layout's text style.
#[component]
pub fn DashHeading(props: DashHeadingProps) -> Element {
    let style = format!(
        "text-align: {}; color: {}; font-size: {}px;",
        props.heading.style.text_align, props.heading.style.color, props.heading.style.font_size
    );

    rsx! {
        h1 {
            style: "{style}",
            "{props.heading.text}"
        }
    }
}
