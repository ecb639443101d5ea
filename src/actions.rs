//! Mutation controller: signup and unregister round-trips.
//!
//! Each mutation is idle → submitted → succeeded | failed. Validation
//! failures are caught before any network call. The controller is
//! single-flight: a second submission while one is pending is refused, so a
//! double-press cannot produce duplicate registrations.

use std::fmt;

use tracing::{info, warn};

use crate::client::{ActivityApi, ClientError};

/// Why a mutation did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Rejected locally before any network call (empty required field).
    Validation(String),
    /// Another mutation is still pending on this controller.
    Busy,
    /// The server call failed; the snapshot was not touched.
    Api(ClientError),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Validation(msg) => f.write_str(msg),
            ActionError::Busy => f.write_str("a request is already in flight"),
            ActionError::Api(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ActionError {}

#[derive(Clone, Copy)]
enum Op {
    Signup,
    Unregister,
}

impl Op {
    fn name(self) -> &'static str {
        match self {
            Op::Signup => "signup",
            Op::Unregister => "unregister",
        }
    }
}

/// Runs mutations against the API with validation and a single-flight guard.
#[derive(Default)]
pub struct MutationController {
    in_flight: bool,
}

impl MutationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `email` for `activity`. Returns the server's message.
    pub fn signup(
        &mut self,
        api: &dyn ActivityApi,
        activity: &str,
        email: &str,
    ) -> Result<String, ActionError> {
        self.submit(Op::Signup, api, activity, email)
    }

    /// Removes `email` from `activity`. Returns the server's message.
    pub fn unregister(
        &mut self,
        api: &dyn ActivityApi,
        activity: &str,
        email: &str,
    ) -> Result<String, ActionError> {
        self.submit(Op::Unregister, api, activity, email)
    }

    fn submit(
        &mut self,
        op: Op,
        api: &dyn ActivityApi,
        activity: &str,
        email: &str,
    ) -> Result<String, ActionError> {
        if activity.trim().is_empty() {
            return Err(ActionError::Validation(
                "Please select an activity".to_string(),
            ));
        }
        if email.trim().is_empty() {
            return Err(ActionError::Validation(
                "Please enter an email address".to_string(),
            ));
        }
        if self.in_flight {
            return Err(ActionError::Busy);
        }

        self.in_flight = true;
        let result = match op {
            Op::Signup => api.signup(activity, email),
            Op::Unregister => api.unregister(activity, email),
        };
        self.in_flight = false;

        match result {
            Ok(message) => {
                info!(op = op.name(), activity, email, "mutation succeeded");
                Ok(message)
            }
            Err(err) => {
                warn!(op = op.name(), activity, email, error = %err, "mutation failed");
                Err(ActionError::Api(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockApi;

    #[test]
    fn empty_fields_fail_before_any_network_call() {
        let mock = MockApi::default();
        let mut controller = MutationController::new();

        let err = controller.signup(&mock, "", "a@x.com").unwrap_err();
        assert!(matches!(err, ActionError::Validation(_)));

        let err = controller.signup(&mock, "Chess Club", "   ").unwrap_err();
        assert!(matches!(err, ActionError::Validation(_)));

        assert!(mock.call_log().is_empty());
    }

    #[test]
    fn signup_passes_exact_identifiers_through() {
        let mock = MockApi::default();
        let mut controller = MutationController::new();

        let message = controller
            .signup(&mock, "Chess Club", "a@x.com")
            .expect("signup succeeds");
        assert_eq!(message, "Signed up a@x.com for Chess Club");
        assert_eq!(mock.call_log(), vec!["signup Chess Club a@x.com"]);
    }

    #[test]
    fn server_rejection_is_surfaced_verbatim() {
        let mock = MockApi::default();
        *mock.signup_response.borrow_mut() = Some(Err(ClientError::Rejected {
            status: 400,
            message: "Student is already signed up".to_string(),
        }));
        let mut controller = MutationController::new();

        let err = controller
            .signup(&mock, "Chess Club", "a@x.com")
            .unwrap_err();
        assert_eq!(err.to_string(), "Student is already signed up");
    }

    #[test]
    fn unregister_carries_activity_and_email_parameters() {
        let mock = MockApi::default();
        let mut controller = MutationController::new();

        controller
            .unregister(&mock, "Drama Club", "d@x.com")
            .expect("unregister succeeds");
        assert_eq!(mock.call_log(), vec!["unregister Drama Club d@x.com"]);
    }

    #[test]
    fn controller_is_idle_again_after_each_round_trip() {
        let mock = MockApi::default();
        let mut controller = MutationController::new();

        controller.signup(&mock, "Chess Club", "a@x.com").unwrap();
        // A failed call must also release the guard.
        *mock.signup_response.borrow_mut() = Some(Err(ClientError::Transport(
            "connection reset".to_string(),
        )));
        let _ = controller.signup(&mock, "Chess Club", "b@x.com");
        *mock.signup_response.borrow_mut() = None;
        controller.signup(&mock, "Chess Club", "c@x.com").unwrap();
    }
}
