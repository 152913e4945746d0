//! HTTP host for the dashboard.
//!
//! The launch table is loaded once before binding; a missing or malformed
//! CSV aborts startup. After that every request is served from shared,
//! read-only state.
//!
//! # Routes
//!
//! - `GET /` - the server-rendered dashboard page
//! - `GET /assets/dash-renderer.js` - browser renderer script
//! - `GET /_dash-layout` - widget tree as JSON
//! - `GET /_dash-dependencies` - callback wiring as JSON
//! - `POST /_dash-update-component` - run one callback and return its figure

use crate::error::StartupError;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use spacex_charts::callbacks::Dependency;
use spacex_charts::{build_layout, CallbackRegistry, DashLayout, Figure, InputValue, PropRef};
use spacex_data::LaunchTable;
use spacex_ui::assets::{DASH_RENDERER_JS, DASH_RENDERER_PATH};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct ServeConfig {
    pub data: PathBuf,
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

/// Shared, read-only state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<CallbackRegistry>,
    layout: Arc<DashLayout>,
    page: Arc<String>,
    debug: bool,
}

impl AppState {
    /// Wire layout, page and callbacks around an already-loaded table.
    pub fn new(table: LaunchTable, debug: bool) -> Self {
        let table = Arc::new(table);
        let layout = build_layout(&table);
        let page = spacex_ui::render_page(&layout);
        Self {
            registry: Arc::new(CallbackRegistry::new(table)),
            layout: Arc::new(layout),
            page: Arc::new(page),
            debug,
        }
    }

    /// Load the launch CSV and build the state.
    pub fn load(data: &Path, debug: bool) -> Result<Self, StartupError> {
        let table = LaunchTable::from_path(data)?;
        Ok(Self::new(table, debug))
    }
}

#[derive(Debug, Deserialize)]
struct UpdateRequest {
    output: String,
    inputs: Vec<InputValue>,
}

#[derive(Debug, Serialize)]
struct UpdateResponse {
    /// `{ "<component id>": { "<property>": figure } }`
    response: HashMap<String, HashMap<String, Figure>>,
    /// Render error behind a degraded figure; only sent in debug mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.as_ref().clone())
}

async fn renderer_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        DASH_RENDERER_JS,
    )
}

async fn layout(State(state): State<AppState>) -> Json<DashLayout> {
    Json(state.layout.as_ref().clone())
}

async fn dependencies(State(state): State<AppState>) -> Json<Vec<Dependency>> {
    Json(state.registry.dependencies())
}

async fn update_component(
    State(state): State<AppState>,
    Json(request): Json<UpdateRequest>,
) -> Response {
    let Some(output) = PropRef::parse(&request.output) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("malformed output {:?}, expected id.property", request.output),
        );
    };

    match state.registry.dispatch(&output, &request.inputs) {
        Ok(rendered) => {
            let mut properties = HashMap::new();
            properties.insert(output.property.clone(), rendered.figure);
            let mut response = HashMap::new();
            response.insert(output.id.clone(), properties);

            let error = if state.debug {
                rendered.error.map(|e| e.to_string())
            } else {
                None
            };
            Json(UpdateResponse { response, error }).into_response()
        }
        Err(e) => {
            log::warn!("update: {}", e);
            error_response(StatusCode::NOT_FOUND, e.to_string())
        }
    }
}

/// Build the router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(DASH_RENDERER_PATH, get(renderer_js))
        .route("/_dash-layout", get(layout))
        .route("/_dash-dependencies", get(dependencies))
        .route("/_dash-update-component", post(update_component))
        .with_state(state)
}

/// Load the data, bind and serve until the process is stopped.
pub async fn run_serve(config: ServeConfig) -> Result<(), StartupError> {
    let state = AppState::load(&config.data, config.debug)?;
    log::info!(
        "serve: {} launch records from {}",
        state.registry.table().len(),
        config.data.display()
    );

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;

    log::info!("Dashboard running at http://{}/", addr);
    if config.debug {
        log::debug!("Debug mode: render errors are returned to the browser");
    }

    axum::serve(listener, router(state))
        .await
        .map_err(StartupError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const LAUNCHES: &str = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
A,1000,FT,1
A,2000,FT,0
A,3000,B4,1
B,4000,B4,0
B,5000,B4,0
";

    fn state(debug: bool) -> AppState {
        AppState::new(LaunchTable::from_csv_str(LAUNCHES).unwrap(), debug)
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_update(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/_dash-update-component")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn index_serves_rendered_page() {
        let response = router(state(false))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("site-dropdown"));
        assert!(html.contains(DASH_RENDERER_PATH));
    }

    #[tokio::test]
    async fn renderer_script_is_served_as_javascript() {
        let response = router(state(false))
            .oneshot(
                Request::builder()
                    .uri(DASH_RENDERER_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("application/javascript"));
    }

    #[tokio::test]
    async fn dependencies_list_both_callbacks() {
        let response = router(state(false))
            .oneshot(
                Request::builder()
                    .uri("/_dash-dependencies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let deps = body_json(response).await;
        assert_eq!(deps[0]["output"], "success-pie-chart.figure");
        assert_eq!(deps[1]["inputs"][1]["id"], "payload-slider");
    }

    #[tokio::test]
    async fn layout_reports_observed_payload_bounds() {
        let response = router(state(false))
            .oneshot(
                Request::builder()
                    .uri("/_dash-layout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let layout = body_json(response).await;
        let slider = layout["children"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["type"] == "RangeSlider")
            .unwrap();
        assert_eq!(slider["value"], json!([1000.0, 5000.0]));
    }

    #[tokio::test]
    async fn update_returns_pie_figure() {
        let response = router(state(false))
            .oneshot(post_update(json!({
                "output": "success-pie-chart.figure",
                "inputs": [{"id": "site-dropdown", "property": "value", "value": "A"}]
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let figure = &body["response"]["success-pie-chart"]["figure"];
        assert_eq!(figure["data"][0]["labels"], json!(["Success", "Failure"]));
        assert_eq!(figure["data"][0]["values"], json!([2, 1]));
        assert_eq!(
            figure["layout"]["title"]["text"],
            "Total Success Launches for A"
        );
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn update_degrades_and_reports_error_in_debug() {
        let request = json!({
            "output": "success-payload-scatter-chart.figure",
            "inputs": [
                {"id": "site-dropdown", "property": "value", "value": "B"},
                {"id": "payload-slider", "property": "value", "value": [0, 500]}
            ]
        });

        let quiet = body_json(
            router(state(false))
                .oneshot(post_update(request.clone()))
                .await
                .unwrap(),
        )
        .await;
        let figure = &quiet["response"]["success-payload-scatter-chart"]["figure"];
        assert_eq!(figure["data"], json!([]));
        assert!(quiet.get("error").is_none());

        let debug = body_json(router(state(true)).oneshot(post_update(request)).await.unwrap()).await;
        assert!(debug["error"].as_str().unwrap().contains("no launch records"));
    }

    #[tokio::test]
    async fn update_unknown_output_is_not_found() {
        let response = router(state(false))
            .oneshot(post_update(json!({
                "output": "missing-chart.figure",
                "inputs": []
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_malformed_output_is_bad_request() {
        let response = router(state(false))
            .oneshot(post_update(json!({"output": "nodot", "inputs": []})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_rejects_unparseable_bodies() {
        let invalid_json = Request::builder()
            .method("POST")
            .uri("/_dash-update-component")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"output\": "))
            .unwrap();
        let response = router(state(false)).oneshot(invalid_json).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let missing_inputs = post_update(json!({"output": "success-pie-chart.figure"}));
        let response = router(state(false)).oneshot(missing_inputs).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn load_missing_file_is_startup_error() {
        let result = AppState::load(Path::new("no/such/spacex_launch_dash.csv"), false);
        assert!(matches!(result, Err(StartupError::Data(_))));
    }
}
