//! Static widget tree for the dashboard page.
//!
//! Built once from the loaded table. Widget ids are the names the callback
//! registry and the browser renderer use to address inputs and outputs.

use serde::Serialize;
use spacex_data::{LaunchTable, PayloadRange, ALL_SITES};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

pub const SITE_DROPDOWN: &str = "site-dropdown";
pub const PIE_CHART: &str = "success-pie-chart";
pub const PAYLOAD_SLIDER: &str = "payload-slider";
pub const SCATTER_CHART: &str = "success-payload-scatter-chart";

pub const SLIDER_MIN_KG: f64 = 0.0;
pub const SLIDER_MAX_KG: f64 = 16000.0;
pub const SLIDER_STEP_KG: f64 = 1000.0;
pub const SLIDER_MARK_INTERVAL_KG: u32 = 2500;

/// Root of the widget tree; children render top to bottom.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashLayout {
    pub children: Vec<Component>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum Component {
    Heading(Heading),
    Dropdown(Dropdown),
    Graph(Graph),
    Paragraph(Paragraph),
    RangeSlider(RangeSlider),
    Break,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Heading {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub text_align: String,
    pub color: String,
    /// Font size in pixels.
    pub font_size: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Placeholder region that a callback fills with a figure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Graph {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paragraph {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RangeSlider {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial selection: the table's observed payload bounds.
    pub value: PayloadRange,
    pub marks: Vec<SliderMark>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

impl DashLayout {
    pub fn dropdown(&self, id: &str) -> Option<&Dropdown> {
        self.children.iter().find_map(|c| match c {
            Component::Dropdown(d) if d.id == id => Some(d),
            _ => None,
        })
    }

    pub fn range_slider(&self, id: &str) -> Option<&RangeSlider> {
        self.children.iter().find_map(|c| match c {
            Component::RangeSlider(s) if s.id == id => Some(s),
            _ => None,
        })
    }

    pub fn graph_ids(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|c| match c {
                Component::Graph(g) => Some(g.id.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Build the dashboard widget tree from the loaded table.
pub fn build_layout(table: &LaunchTable) -> DashLayout {
    let mut options = vec![DropdownOption {
        label: ALL_SITES.to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(table.sites_by_frequency().into_iter().map(|site| DropdownOption {
        label: site.clone(),
        value: site,
    }));

    let children = vec![
        Component::Heading(Heading {
            text: DASHBOARD_TITLE.to_string(),
            style: TextStyle {
                text_align: "center".to_string(),
                color: "#503D36".to_string(),
                font_size: 40,
            },
        }),
        Component::Dropdown(Dropdown {
            id: SITE_DROPDOWN.to_string(),
            options,
            value: ALL_SITES.to_string(),
            placeholder: "Select a Launch Site here".to_string(),
            searchable: true,
        }),
        Component::Break,
        Component::Graph(Graph {
            id: PIE_CHART.to_string(),
        }),
        Component::Break,
        Component::Paragraph(Paragraph {
            text: "Payload range (Kg):".to_string(),
        }),
        Component::RangeSlider(RangeSlider {
            id: PAYLOAD_SLIDER.to_string(),
            min: SLIDER_MIN_KG,
            max: SLIDER_MAX_KG,
            step: SLIDER_STEP_KG,
            value: table.payload_bounds(),
            marks: slider_marks(),
        }),
        Component::Graph(Graph {
            id: SCATTER_CHART.to_string(),
        }),
    ];

    DashLayout { children }
}

/// Labelled ticks every 2500 kg inside the slider bounds, excluding zero.
fn slider_marks() -> Vec<SliderMark> {
    (1..)
        .map(|i| i * SLIDER_MARK_INTERVAL_KG)
        .take_while(|kg| f64::from(*kg) <= SLIDER_MAX_KG)
        .map(|kg| SliderMark {
            value: f64::from(kg),
            label: format!("{kg} (Kg)"),
        })
        .collect()
}
