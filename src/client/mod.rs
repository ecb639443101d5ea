//! Server access: the `ActivityApi` seam and its HTTP implementation.

use std::fmt;

use crate::model::Snapshot;

mod http;
#[cfg(test)]
pub mod mock;

pub use http::HttpClient;

/// Failure taxonomy for server round-trips.
///
/// None of these are fatal: the view stays interactive and the current
/// snapshot stays untouched whichever variant comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Network / transport failure (connect, timeout, TLS, ...).
    Transport(String),
    /// The server answered 2xx but the payload did not decode.
    Decode(String),
    /// The server rejected the request with a business error; `message` is
    /// surfaced to the user verbatim.
    Rejected { status: u16, message: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "request failed: {msg}"),
            ClientError::Decode(msg) => write!(f, "bad server response: {msg}"),
            ClientError::Rejected { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for ClientError {}

/// Operations the signup service exposes. `HttpClient` is the real thing;
/// tests substitute `mock::MockApi`.
pub trait ActivityApi {
    /// Reads the full activity roster.
    fn fetch_activities(&self) -> Result<Snapshot, ClientError>;

    /// Registers `email` for the named activity. Returns the server's
    /// confirmation message.
    fn signup(&self, activity: &str, email: &str) -> Result<String, ClientError>;

    /// Removes `email` from the named activity. Returns the server's
    /// confirmation message.
    fn unregister(&self, activity: &str, email: &str) -> Result<String, ClientError>;
}
