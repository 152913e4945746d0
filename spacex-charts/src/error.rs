/// Error types for chart rendering and callback dispatch
use spacex_data::PayloadRange;
use thiserror::Error;

/// A handler could not produce a chart for the given inputs.
///
/// Never propagated to the caller of a callback: the figure degrades to an
/// empty chart and the error rides along in [`crate::handlers::Rendered`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The selected site has no launch records
    #[error("no launch records for site {site}")]
    NoSiteRows { site: String },

    /// Nothing in the selection falls inside the payload range
    #[error("no launch records for {selection} with payload in {range}")]
    NoRowsInRange {
        selection: String,
        range: PayloadRange,
    },

    /// A declared input was not sent with the request
    #[error("missing input {0}")]
    MissingInput(String),

    /// An input value has the wrong shape
    #[error("invalid value for {input}: {reason}")]
    InvalidInput { input: String, reason: String },

    /// The payload range has lo > hi or a non-finite bound
    #[error("invalid payload range [{lo}, {hi}]")]
    InvalidRange { lo: f64, hi: f64 },
}

/// A callback request that names nothing the registry knows about.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error("no callback registered for output {0}")]
    UnknownOutput(String),
}
