//! The two chart handlers.
//!
//! Both are pure functions of the table and the current widget values. The
//! `try_*` variants report a [`RenderError`]; the `render_*` variants never
//! fail and degrade to an empty figure carrying the same title.

use crate::error::RenderError;
use crate::figure::{Figure, PieTrace, ScatterTrace, Trace};
use spacex_data::{LaunchTable, PayloadRange, SiteSelection};
use std::collections::HashMap;

pub const PIE_TITLE_PREFIX: &str = "Total Success Launches for";

/// Fixed for every site selection; it does not name the selected site.
pub const SCATTER_TITLE: &str =
    "Success and Failure outcomes for selected Payload Mass at all Launch sites";

pub const PAYLOAD_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const CLASS_AXIS_TITLE: &str = "class";
pub const BOOSTER_LEGEND_TITLE: &str = "Booster Version Category";

/// A handler result that always has a figure to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub figure: Figure,
    /// Set when `figure` is the empty fallback.
    pub error: Option<RenderError>,
}

impl Rendered {
    /// Keep a successful figure, or fall back to an empty one titled `title`.
    pub fn or_empty(result: Result<Figure, RenderError>, title: &str) -> Self {
        match result {
            Ok(figure) => Self {
                figure,
                error: None,
            },
            Err(e) => {
                log::warn!("render degraded to empty chart: {}", e);
                Self {
                    figure: Figure::empty(title),
                    error: Some(e),
                }
            }
        }
    }
}

/// "Total Success Launches for <site>", one space after "for".
pub fn pie_title(selection: &SiteSelection) -> String {
    format!("{} {}", PIE_TITLE_PREFIX, selection)
}

/// Success pie chart for a site selection.
///
/// - `AllSites`: one slice per site, sized by its success count.
/// - `Site(name)`: "Success" and "Failure" slices for that site.
pub fn try_site_success_pie(
    table: &LaunchTable,
    selection: &SiteSelection,
) -> Result<Figure, RenderError> {
    let trace = match selection {
        SiteSelection::AllSites => {
            let (labels, values) = table
                .success_by_site()
                .into_iter()
                .map(|s| (s.site, s.successes))
                .unzip();
            PieTrace { labels, values }
        }
        SiteSelection::Site(site) => {
            if !table.has_site(site) {
                return Err(RenderError::NoSiteRows { site: site.clone() });
            }
            let counts = table.outcome_counts(site);
            PieTrace {
                labels: vec!["Success".to_string(), "Failure".to_string()],
                values: vec![counts.success, counts.failure],
            }
        }
    };

    Ok(Figure::empty(pie_title(selection)).with_trace(Trace::Pie(trace)))
}

pub fn render_site_success_pie(table: &LaunchTable, selection: &SiteSelection) -> Rendered {
    log::debug!("pie: site={}", selection);
    Rendered::or_empty(
        try_site_success_pie(table, selection),
        &pie_title(selection),
    )
}

/// Total form of [`try_site_success_pie`].
pub fn site_success_pie(table: &LaunchTable, selection: &SiteSelection) -> Figure {
    render_site_success_pie(table, selection).figure
}

/// Payload vs. outcome scatter chart, one trace per booster version category.
///
/// Rows are restricted to the selection first, then to `lo <= payload <= hi`.
pub fn try_payload_outcome_scatter(
    table: &LaunchTable,
    selection: &SiteSelection,
    range: PayloadRange,
) -> Result<Figure, RenderError> {
    let mut traces: Vec<ScatterTrace> = Vec::new();
    let mut hover: Vec<Vec<Option<&str>>> = Vec::new();
    let mut by_category: HashMap<&str, usize> = HashMap::new();

    for record in table.rows_in_payload_range(selection, range) {
        let category = record.booster_version_category.as_str();
        let i = *by_category.entry(category).or_insert_with(|| {
            traces.push(ScatterTrace {
                name: category.to_string(),
                mode: "markers".to_string(),
                x: Vec::new(),
                y: Vec::new(),
                text: None,
            });
            hover.push(Vec::new());
            traces.len() - 1
        });
        traces[i].x.push(record.payload_mass_kg);
        traces[i].y.push(record.class);
        hover[i].push(record.booster_version.as_deref());
    }

    if traces.is_empty() {
        return Err(RenderError::NoRowsInRange {
            selection: selection.to_string(),
            range,
        });
    }

    for (trace, texts) in traces.iter_mut().zip(hover) {
        if texts.iter().any(Option::is_some) {
            trace.text = Some(
                texts
                    .into_iter()
                    .map(|t| t.unwrap_or_default().to_string())
                    .collect(),
            );
        }
    }

    let figure = traces.into_iter().fold(Figure::empty(SCATTER_TITLE), |fig, t| {
        fig.with_trace(Trace::Scatter(t))
    });
    Ok(figure
        .with_axes(PAYLOAD_AXIS_TITLE, CLASS_AXIS_TITLE)
        .with_legend(BOOSTER_LEGEND_TITLE))
}

pub fn render_payload_outcome_scatter(
    table: &LaunchTable,
    selection: &SiteSelection,
    range: PayloadRange,
) -> Rendered {
    log::debug!("scatter: site={} payload={}", selection, range);
    Rendered::or_empty(
        try_payload_outcome_scatter(table, selection, range),
        SCATTER_TITLE,
    )
}

/// Total form of [`try_payload_outcome_scatter`].
pub fn payload_outcome_scatter(
    table: &LaunchTable,
    selection: &SiteSelection,
    range: PayloadRange,
) -> Figure {
    render_payload_outcome_scatter(table, selection, range).figure
}
