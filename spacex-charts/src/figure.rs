//! Chart descriptions returned by the handlers.
//!
//! The serialized shape follows Plotly's figure JSON (`{"data": [...], "layout": {...}}`)
//! so the browser can hand it straight to `Plotly.react`.

use serde::Serialize;

/// A complete chart: traces plus layout.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

/// One series of a chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
}

/// Pie slices: `labels[i]` is sized by `values[i]`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
}

/// Scatter points for one legend entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterTrace {
    /// Legend entry (the booster version category).
    pub name: String,
    pub mode: String,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FigureLayout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Legend {
    pub title: Title,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Figure {
    /// A titled figure with no traces.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            layout: FigureLayout {
                title: Title::new(title),
                xaxis: None,
                yaxis: None,
                legend: None,
            },
        }
    }

    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    pub fn with_axes(mut self, x_title: &str, y_title: &str) -> Self {
        self.layout.xaxis = Some(Axis {
            title: Title::new(x_title),
        });
        self.layout.yaxis = Some(Axis {
            title: Title::new(y_title),
        });
        self
    }

    pub fn with_legend(mut self, legend_title: &str) -> Self {
        self.layout.legend = Some(Legend {
            title: Title::new(legend_title),
        });
        self
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// (label, value) pairs of the first pie trace, if any.
    pub fn pie_slices(&self) -> Vec<(&str, u32)> {
        self.data
            .iter()
            .find_map(|trace| match trace {
                Trace::Pie(pie) => Some(pie),
                Trace::Scatter(_) => None,
            })
            .map(|pie| {
                pie.labels
                    .iter()
                    .map(String::as_str)
                    .zip(pie.values.iter().copied())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// (x, y) points across every scatter trace, in trace order.
    pub fn scatter_points(&self) -> Vec<(f64, u8)> {
        self.data
            .iter()
            .filter_map(|trace| match trace {
                Trace::Scatter(scatter) => Some(scatter),
                Trace::Pie(_) => None,
            })
            .flat_map(|s| s.x.iter().copied().zip(s.y.iter().copied()))
            .collect()
    }
}
