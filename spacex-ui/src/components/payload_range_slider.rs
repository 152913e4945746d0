//! Payload range slider with low and high handles.

use dioxus::prelude::*;
use spacex_charts::layout::RangeSlider;

#[derive(Props, Clone, PartialEq)]
pub struct PayloadRangeSliderProps {
    pub slider: RangeSlider,
}

/// Two linked range inputs over the slider bounds, with labelled tick marks.
///
/// The exact current selection is kept in `data-lo`/`data-hi` on the
/// wrapper, since the inputs themselves snap to the step.
#[component]
pub fn PayloadRangeSlider(props: PayloadRangeSliderProps) -> Element {
    let slider = &props.slider;
    let lo = slider.value.lo();
    let hi = slider.value.hi();
    let list_id = format!("{}-marks", slider.id);
    let span = (slider.max - slider.min).max(1.0);
    let marks: Vec<(String, f64)> = slider
        .marks
        .iter()
        .map(|m| (m.label.clone(), (m.value - slider.min) / span * 100.0))
        .collect();

    rsx! {
        div {
            id: "{slider.id}",
            class: "dash-range-slider",
            "data-lo": "{lo}",
            "data-hi": "{hi}",
            style: "margin: 8px 0 24px 0;",
            div {
                style: "display: flex; gap: 8px;",
                input {
                    r#type: "range",
                    class: "dash-range-lo",
                    min: "{slider.min}",
                    max: "{slider.max}",
                    step: "{slider.step}",
                    value: "{lo}",
                    "list": "{list_id}",
                    style: "flex: 1;",
                }
                input {
                    r#type: "range",
                    class: "dash-range-hi",
                    min: "{slider.min}",
                    max: "{slider.max}",
                    step: "{slider.step}",
                    value: "{hi}",
                    "list": "{list_id}",
                    style: "flex: 1;",
                }
            }
            datalist {
                id: "{list_id}",
                for mark in slider.marks.iter() {
                    option { value: "{mark.value}", "{mark.label}" }
                }
            }
            div {
                style: "position: relative; height: 18px;",
                for (label, pct) in marks.iter() {
                    span {
                        style: "position: absolute; left: {pct}%; transform: translateX(-50%); font-size: 11px; color: #666;",
                        "{label}"
                    }
                }
            }
            span {
                class: "dash-range-readout",
                style: "font-size: 12px; color: #444;",
                "{lo} - {hi} kg"
            }
        }
    }
}
