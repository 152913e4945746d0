//! Dropdown selector for choosing a launch site.

use dioxus::prelude::*;
use spacex_charts::layout::Dropdown;

#[derive(Props, Clone, PartialEq)]
pub struct SiteSelectorProps {
    pub dropdown: Dropdown,
}

/// Launch site dropdown.
/// A searchable dropdown gets a filter box that narrows the visible options.
#[component]
pub fn SiteSelector(props: SiteSelectorProps) -> Element {
    let dropdown = &props.dropdown;

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            if dropdown.searchable {
                input {
                    r#type: "search",
                    class: "dash-dropdown-search",
                    placeholder: "{dropdown.placeholder}",
                    "data-target": "{dropdown.id}",
                    style: "flex: 1; padding: 6px;",
                }
            }
            select {
                id: "{dropdown.id}",
                style: "flex: 2; padding: 6px;",
                for opt in dropdown.options.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == dropdown.value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
