//! Test utilities for assembling application state around a [`TestSetup`]

use sizevault::server::{identity::IdentityClient, model::app::AppState};
use sizevault_test_utils::{
    constant::{TEST_IDENTITY_API_KEY, TEST_PUBLIC_ORIGIN},
    TestSetup,
};

/// Extension trait for [`TestSetup`] to create an [`AppState`] wired to the
/// in-memory database and the mock identity server
pub trait TestSetupExt {
    fn into_app_state(&self) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            identity: IdentityClient::new(&self.server.url(), TEST_IDENTITY_API_KEY),
            public_origin: TEST_PUBLIC_ORIGIN.to_string(),
        }
    }
}
