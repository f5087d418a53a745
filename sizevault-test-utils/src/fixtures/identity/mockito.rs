//! Identity provider HTTP mock endpoint creation utilities.
//!
//! These methods register mock endpoints on the test server that stand in for
//! the external email/password identity provider. Response bodies mirror the
//! provider's token and signup payloads.

use mockito::Mock;
use serde_json::json;

use crate::fixtures::identity::IdentityFixtures;

impl<'a> IdentityFixtures<'a> {
    /// Create a mock password sign-in endpoint returning a session.
    ///
    /// Registers POST `/token?grant_type=password` responding with an access
    /// token and the account object for the given id and email. The mock
    /// verifies it was called exactly `expected_requests` times.
    pub fn create_sign_in_endpoint(
        &mut self,
        account_id: &str,
        email: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "access_token": "test-access-token",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": {
                "id": account_id,
                "email": email,
            }
        });

        self.setup
            .server
            .mock("POST", "/token?grant_type=password")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock sign-in endpoint that rejects the credentials.
    pub fn create_sign_in_failure_endpoint(&mut self, expected_requests: usize) -> Mock {
        let body = json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials",
        });

        self.setup
            .server
            .mock("POST", "/token?grant_type=password")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock sign-up endpoint returning an immediate session.
    pub fn create_sign_up_endpoint(
        &mut self,
        account_id: &str,
        email: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "access_token": "test-access-token",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": {
                "id": account_id,
                "email": email,
            }
        });

        self.setup
            .server
            .mock("POST", "/signup")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock sign-up endpoint that rejects the registration.
    ///
    /// Responds with a 422 and a `msg` body the way the provider reports
    /// password policy violations.
    pub fn create_sign_up_failure_endpoint(&mut self, expected_requests: usize) -> Mock {
        let body = json!({
            "msg": "Password should be at least 6 characters",
        });

        self.setup
            .server
            .mock("POST", "/signup")
            .with_status(422)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock sign-up endpoint that requires email confirmation.
    ///
    /// The provider returns the bare account object without an access token
    /// when confirmation is pending.
    pub fn create_sign_up_confirmation_endpoint(
        &mut self,
        account_id: &str,
        email: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "id": account_id,
            "email": email,
            "confirmation_sent_at": "2026-01-01T00:00:00Z",
        });

        self.setup
            .server
            .mock("POST", "/signup")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
