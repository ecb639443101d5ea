//! Snapshot store: the single source of truth for server state.

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::client::{ActivityApi, ClientError};
use crate::model::Snapshot;

/// Holds the latest roster snapshot and the API used to refresh it.
///
/// `refresh` replaces the snapshot wholesale on success; on failure the
/// previous snapshot stays untouched and the error is kept for display.
/// Nothing retries automatically — the next triggering event does.
pub struct SnapshotStore {
    api: Box<dyn ActivityApi>,
    snapshot: Option<Snapshot>,
    last_error: Option<ClientError>,
    last_refresh: Option<DateTime<Local>>,
}

impl SnapshotStore {
    pub fn new(api: Box<dyn ActivityApi>) -> Self {
        Self {
            api,
            snapshot: None,
            last_error: None,
            last_refresh: None,
        }
    }

    /// Fetches the roster and installs it. Returns the new snapshot on
    /// success; on failure keeps the stale one and records the error.
    pub fn refresh(&mut self) -> Option<&Snapshot> {
        self.last_error = None;

        match self.api.fetch_activities() {
            Ok(snapshot) => {
                debug!(activities = snapshot.len(), "roster refreshed");
                self.snapshot = Some(snapshot);
                self.last_refresh = Some(Local::now());
                self.snapshot.as_ref()
            }
            Err(err) => {
                warn!(error = %err, "roster refresh failed");
                self.last_error = Some(err);
                None
            }
        }
    }

    /// Read-only view of the current snapshot. `None` means no fetch has
    /// ever succeeded.
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn last_error(&self) -> Option<&ClientError> {
        self.last_error.as_ref()
    }

    pub fn last_refresh(&self) -> Option<DateTime<Local>> {
        self.last_refresh
    }

    pub fn api(&self) -> &dyn ActivityApi {
        self.api.as_ref()
    }
}
