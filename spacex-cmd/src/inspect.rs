//! Offline evaluation of the dashboard callbacks.
//!
//! Loads the CSV, simulates a change of the site dropdown and prints the
//! layout plus every figure that change would refresh.

use anyhow::Context;
use serde_json::{json, Map, Value};
use spacex_charts::layout::{PAYLOAD_SLIDER, SITE_DROPDOWN};
use spacex_charts::{build_layout, CallbackRegistry, InputValue, PropRef};
use spacex_data::LaunchTable;
use std::path::Path;
use std::sync::Arc;

/// Evaluate the callbacks for one site and payload range and print the
/// result as pretty JSON.
pub fn run_inspect(data: &Path, site: &str, payload: Option<&[f64]>) -> anyhow::Result<()> {
    let report = inspect_report(data, site, payload)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn inspect_report(data: &Path, site: &str, payload: Option<&[f64]>) -> anyhow::Result<Value> {
    let table = LaunchTable::from_path(data)
        .with_context(|| format!("loading launch data from {}", data.display()))?;
    let table = Arc::new(table);
    let layout = build_layout(&table);
    let registry = CallbackRegistry::new(Arc::clone(&table));

    let range = match payload {
        Some([lo, hi]) => json!([lo, hi]),
        Some(other) => anyhow::bail!("expected two payload bounds, got {}", other.len()),
        None => json!(table.payload_bounds()),
    };
    let values = vec![
        InputValue {
            id: SITE_DROPDOWN.to_string(),
            property: "value".to_string(),
            value: json!(site),
        },
        InputValue {
            id: PAYLOAD_SLIDER.to_string(),
            property: "value".to_string(),
            value: range,
        },
    ];

    let mut figures = Map::new();
    for output in registry.outputs_for(&PropRef::new(SITE_DROPDOWN, "value")) {
        let rendered = registry.dispatch(output, &values)?;
        let mut entry = json!({ "figure": rendered.figure });
        if let Some(e) = rendered.error {
            log::warn!("inspect: {} degraded: {}", output, e);
            entry["error"] = json!(e.to_string());
        }
        figures.insert(output.to_string(), entry);
    }

    Ok(json!({
        "records": table.len(),
        "layout": layout,
        "dependencies": registry.dependencies(),
        "figures": figures,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn launch_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"Launch Site,Payload Mass (kg),Booster Version Category,class\n\
              A,1000,FT,1\n\
              A,2000,FT,0\n\
              B,4000,B4,0\n",
        )
        .unwrap();
        file
    }

    #[test]
    fn report_contains_both_figures() {
        let file = launch_file();
        let report = inspect_report(file.path(), "All Sites", None).unwrap();
        assert_eq!(report["records"], 3);
        let figures = report["figures"].as_object().unwrap();
        assert!(figures.contains_key("success-pie-chart.figure"));
        assert!(figures.contains_key("success-payload-scatter-chart.figure"));
        assert_eq!(
            report["figures"]["success-pie-chart.figure"]["figure"]["data"][0]["values"],
            json!([1, 0])
        );
    }

    #[test]
    fn report_marks_degraded_figures() {
        let file = launch_file();
        let report = inspect_report(file.path(), "B", Some(&[0.0, 1000.0][..])).unwrap();
        let scatter = &report["figures"]["success-payload-scatter-chart.figure"];
        assert_eq!(scatter["figure"]["data"], json!([]));
        assert!(scatter["error"].is_string());
    }

    #[test]
    fn report_fails_on_missing_file() {
        let err = inspect_report(Path::new("no/such.csv"), "All Sites", None).unwrap_err();
        assert!(err.to_string().contains("no/such.csv"));
    }
}
