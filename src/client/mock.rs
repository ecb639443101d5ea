//! In-memory `ActivityApi` for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::model::Snapshot;

use super::{ActivityApi, ClientError};

/// Records every call and answers from pre-queued responses.
#[derive(Default)]
pub struct MockApi {
    /// Responses for successive `fetch_activities` calls (front first).
    /// An exhausted queue answers with a transport error.
    pub fetches: RefCell<VecDeque<Result<Snapshot, ClientError>>>,
    pub signup_response: RefCell<Option<Result<String, ClientError>>>,
    pub unregister_response: RefCell<Option<Result<String, ClientError>>>,
    /// Call log, e.g. `"signup Chess Club a@x.com"`.
    pub calls: RefCell<Vec<String>>,
}

impl MockApi {
    pub fn with_fetch(snapshot: Snapshot) -> Self {
        let mock = Self::default();
        mock.fetches.borrow_mut().push_back(Ok(snapshot));
        mock
    }

    pub fn queue_fetch(&self, result: Result<Snapshot, ClientError>) {
        self.fetches.borrow_mut().push_back(result);
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ActivityApi for MockApi {
    fn fetch_activities(&self) -> Result<Snapshot, ClientError> {
        self.calls.borrow_mut().push("fetch".to_string());
        self.fetches
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no queued response".to_string())))
    }

    fn signup(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        self.calls
            .borrow_mut()
            .push(format!("signup {activity} {email}"));
        self.signup_response
            .borrow()
            .clone()
            .unwrap_or_else(|| Ok(format!("Signed up {email} for {activity}")))
    }

    fn unregister(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        self.calls
            .borrow_mut()
            .push(format!("unregister {activity} {email}"));
        self.unregister_response
            .borrow()
            .clone()
            .unwrap_or_else(|| Ok(format!("Removed {email} from {activity}")))
    }
}
