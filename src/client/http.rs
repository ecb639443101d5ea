//! HTTP implementation of `ActivityApi` over ureq.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::model::Snapshot;

use super::{ActivityApi, ClientError};

/// Success envelope for mutation endpoints.
#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

/// Error envelope for rejected requests.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Blocking HTTP client for the signup service.
pub struct HttpClient {
    agent: ureq::Agent,
    base: Url,
}

impl HttpClient {
    /// Creates a client against `base` (e.g. `http://localhost:8000`).
    pub fn new(base: Url, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent, base }
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Builds `base` + path segments. Segments are percent-encoded by `url`,
    /// so activity names with spaces stay intact.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Transport("server url is not a valid base".to_string()))?
            .extend(segments);
        Ok(url)
    }

    fn execute(&self, method: &str, url: &Url) -> Result<ureq::Response, ClientError> {
        debug!(%method, url = %url, "server request");
        match self.agent.request(method, url.as_str()).call() {
            Ok(resp) => Ok(resp),
            Err(ureq::Error::Status(status, resp)) => Err(rejection(status, resp)),
            Err(ureq::Error::Transport(err)) => Err(ClientError::Transport(err.to_string())),
        }
    }

    fn mutate(&self, action: &str, activity: &str, email: &str) -> Result<String, ClientError> {
        let mut url = self.endpoint(&["activities", activity, action])?;
        url.query_pairs_mut().append_pair("email", email);
        let resp = self.execute("POST", &url)?;
        // Mutations confirm with {"message": ...}; tolerate servers that
        // answer with something else.
        Ok(serde_json::from_reader::<_, MessageBody>(resp.into_reader())
            .map(|body| body.message)
            .unwrap_or_else(|_| "request accepted".to_string()))
    }
}

impl ActivityApi for HttpClient {
    fn fetch_activities(&self) -> Result<Snapshot, ClientError> {
        let url = self.endpoint(&["activities"])?;
        let resp = self.execute("GET", &url)?;
        serde_json::from_reader::<_, Snapshot>(resp.into_reader())
            .map_err(|err| ClientError::Decode(err.to_string()))
    }

    fn signup(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        self.mutate("signup", activity, email)
    }

    fn unregister(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        self.mutate("unregister", activity, email)
    }
}

/// Maps a non-2xx response to `ClientError::Rejected`, preferring the
/// service's `{"detail": ...}` envelope, falling back to the raw body.
fn rejection(status: u16, resp: ureq::Response) -> ClientError {
    let message = match resp.into_string() {
        Ok(body) => match serde_json::from_str::<ErrorBody>(&body) {
            Ok(err) => err.detail,
            Err(_) if !body.trim().is_empty() => body,
            Err(_) => format!("HTTP {status}"),
        },
        Err(_) => format!("HTTP {status}"),
    };
    ClientError::Rejected { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_encodes_activity_names() {
        let client = HttpClient::new(
            Url::parse("http://localhost:8000").unwrap(),
            Duration::from_secs(5),
        );
        let url = client
            .endpoint(&["activities", "Chess Club", "signup"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/activities/Chess%20Club/signup"
        );
    }

    #[test]
    fn endpoint_appends_to_base_path() {
        let client = HttpClient::new(
            Url::parse("http://example.com/api").unwrap(),
            Duration::from_secs(5),
        );
        let url = client.endpoint(&["activities"]).unwrap();
        assert_eq!(url.as_str(), "http://example.com/api/activities");
    }
}
