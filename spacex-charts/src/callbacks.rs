//! Static observer map from widget properties to chart handlers.
//!
//! The registry is wired once at startup with the two dashboard callbacks
//! and owns a shared, read-only handle to the launch table. The host only
//! ever calls [`CallbackRegistry::dispatch`] with the values the browser sent.

use crate::error::{DispatchError, RenderError};
use crate::figure::Figure;
use crate::handlers::{self, Rendered};
use crate::layout::{PAYLOAD_SLIDER, PIE_CHART, SCATTER_CHART, SITE_DROPDOWN};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use spacex_data::{LaunchTable, PayloadRange, SiteSelection};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A widget property, written `id.property` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropRef {
    pub id: String,
    pub property: String,
}

impl PropRef {
    pub fn new(id: &str, property: &str) -> Self {
        Self {
            id: id.to_string(),
            property: property.to_string(),
        }
    }

    /// Parse `id.property`, splitting at the last dot.
    pub fn parse(s: &str) -> Option<Self> {
        let (id, property) = s.rsplit_once('.')?;
        if id.is_empty() || property.is_empty() {
            return None;
        }
        Some(Self::new(id, property))
    }
}

impl fmt::Display for PropRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.id, self.property)
    }
}

/// One input value as sent by the browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputValue {
    pub id: String,
    pub property: String,
    pub value: Value,
}

/// Input values of one callback invocation, keyed by property.
#[derive(Debug, Default)]
pub struct Inputs {
    values: HashMap<PropRef, Value>,
}

impl Inputs {
    pub fn from_values(values: &[InputValue]) -> Self {
        Self {
            values: values
                .iter()
                .map(|v| (PropRef::new(&v.id, &v.property), v.value.clone()))
                .collect(),
        }
    }

    fn get(&self, prop: &PropRef) -> Result<&Value, RenderError> {
        self.values
            .get(prop)
            .ok_or_else(|| RenderError::MissingInput(prop.to_string()))
    }

    /// Dropdown value as a site selection.
    pub fn site(&self, prop: &PropRef) -> Result<SiteSelection, RenderError> {
        match self.get(prop)? {
            Value::String(s) => Ok(SiteSelection::from_value(s)),
            other => Err(RenderError::InvalidInput {
                input: prop.to_string(),
                reason: format!("expected a site name, got {}", other),
            }),
        }
    }

    /// Range slider value `[lo, hi]` as a payload range.
    pub fn payload_range(&self, prop: &PropRef) -> Result<PayloadRange, RenderError> {
        let invalid = |reason: String| RenderError::InvalidInput {
            input: prop.to_string(),
            reason,
        };
        let pair = match self.get(prop)? {
            Value::Array(items) if items.len() == 2 => items,
            other => return Err(invalid(format!("expected [lo, hi], got {}", other))),
        };
        let lo = pair[0]
            .as_f64()
            .ok_or_else(|| invalid(format!("lower bound is not a number: {}", pair[0])))?;
        let hi = pair[1]
            .as_f64()
            .ok_or_else(|| invalid(format!("upper bound is not a number: {}", pair[1])))?;
        PayloadRange::new(lo, hi).ok_or(RenderError::InvalidRange { lo, hi })
    }
}

type Handler = fn(&LaunchTable, &Inputs) -> Rendered;

struct Callback {
    output: PropRef,
    inputs: Vec<PropRef>,
    handler: Handler,
}

/// Serializable description of one callback, sent to the browser.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dependency {
    pub output: String,
    pub inputs: Vec<PropRef>,
}

pub struct CallbackRegistry {
    table: Arc<LaunchTable>,
    callbacks: Vec<Callback>,
    by_output: HashMap<PropRef, usize>,
    by_input: HashMap<PropRef, Vec<usize>>,
}

fn site_value() -> PropRef {
    PropRef::new(SITE_DROPDOWN, "value")
}

fn payload_value() -> PropRef {
    PropRef::new(PAYLOAD_SLIDER, "value")
}

fn pie_callback(table: &LaunchTable, inputs: &Inputs) -> Rendered {
    match inputs.site(&site_value()) {
        Ok(selection) => handlers::render_site_success_pie(table, &selection),
        Err(e) => Rendered::or_empty(
            Err(e),
            &handlers::pie_title(&SiteSelection::AllSites),
        ),
    }
}

fn scatter_callback(table: &LaunchTable, inputs: &Inputs) -> Rendered {
    let decoded = inputs
        .site(&site_value())
        .and_then(|site| Ok((site, inputs.payload_range(&payload_value())?)));
    match decoded {
        Ok((selection, range)) => {
            handlers::render_payload_outcome_scatter(table, &selection, range)
        }
        Err(e) => Rendered::or_empty(Err(e), handlers::SCATTER_TITLE),
    }
}

impl CallbackRegistry {
    /// Wire the dashboard callbacks against `table`.
    pub fn new(table: Arc<LaunchTable>) -> Self {
        let mut registry = Self {
            table,
            callbacks: Vec::new(),
            by_output: HashMap::new(),
            by_input: HashMap::new(),
        };
        registry.register(
            PropRef::new(PIE_CHART, "figure"),
            vec![site_value()],
            pie_callback,
        );
        registry.register(
            PropRef::new(SCATTER_CHART, "figure"),
            vec![site_value(), payload_value()],
            scatter_callback,
        );
        log::info!(
            "callbacks: wired {} outputs",
            registry.callbacks.len()
        );
        registry
    }

    fn register(&mut self, output: PropRef, inputs: Vec<PropRef>, handler: Handler) {
        let index = self.callbacks.len();
        for input in &inputs {
            self.by_input.entry(input.clone()).or_default().push(index);
        }
        self.by_output.insert(output.clone(), index);
        self.callbacks.push(Callback {
            output,
            inputs,
            handler,
        });
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn dependencies(&self) -> Vec<Dependency> {
        self.callbacks
            .iter()
            .map(|c| Dependency {
                output: c.output.to_string(),
                inputs: c.inputs.clone(),
            })
            .collect()
    }

    /// Outputs to refresh when `input` changes, in registration order.
    pub fn outputs_for(&self, input: &PropRef) -> Vec<&PropRef> {
        self.by_input
            .get(input)
            .map(|indices| indices.iter().map(|&i| &self.callbacks[i].output).collect())
            .unwrap_or_default()
    }

    /// Run the callback bound to `output` with the given input values.
    ///
    /// Only an unknown output is an error; every input problem degrades to
    /// an empty figure inside the returned [`Rendered`].
    pub fn dispatch(
        &self,
        output: &PropRef,
        values: &[InputValue],
    ) -> Result<Rendered, DispatchError> {
        let index = *self
            .by_output
            .get(output)
            .ok_or_else(|| DispatchError::UnknownOutput(output.to_string()))?;
        let callback = &self.callbacks[index];
        log::debug!("dispatch: {} <- {:?}", callback.output, values);
        Ok((callback.handler)(&self.table, &Inputs::from_values(values)))
    }

    /// Convenience for callers that only need the figure.
    pub fn figure(&self, output: &PropRef, values: &[InputValue]) -> Result<Figure, DispatchError> {
        self.dispatch(output, values).map(|r| r.figure)
    }
}
