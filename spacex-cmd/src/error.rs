/// Error types for starting the dashboard host
use spacex_data::DataLoadError;
use thiserror::Error;

/// Fatal conditions that stop the process before it serves anything.
#[derive(Error, Debug)]
pub enum StartupError {
    /// The launch CSV is missing or malformed
    #[error("failed to load launch data")]
    Data(#[from] DataLoadError),

    /// The listen address is invalid or already in use
    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server loop exited with an I/O error
    #[error("server loop exited")]
    Serve(#[source] std::io::Error),
}
