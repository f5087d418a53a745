//! Standard constant values shared across tests.
//!
//! These values are placeholders for testing purposes, not real credentials.

/// Mock publishable API key sent to the identity provider in test requests.
pub static TEST_IDENTITY_API_KEY: &str = "identity_api_key";

/// Account id the identity mocks hand out by default.
pub static TEST_ACCOUNT_ID: &str = "00000000-0000-4000-8000-000000000001";

/// Second account id for multi-account scenarios.
pub static TEST_ACCOUNT_ID_B: &str = "00000000-0000-4000-8000-000000000002";

/// Third account id for scenarios needing a late arrival.
pub static TEST_ACCOUNT_ID_C: &str = "00000000-0000-4000-8000-000000000003";

/// Email address paired with [`TEST_ACCOUNT_ID`] in identity mocks.
pub static TEST_ACCOUNT_EMAIL: &str = "parent@example.com";

/// Password accepted by the identity sign-in mocks.
pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// Origin used when building invite links in tests.
pub static TEST_PUBLIC_ORIGIN: &str = "http://localhost:8080";
