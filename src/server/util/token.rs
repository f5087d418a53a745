//! Invite token generation.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::Rng;

/// Number of random bytes behind each invite token.
const INVITE_TOKEN_BYTES: usize = 24;

/// Generates an opaque invite token.
///
/// Tokens are random bytes encoded as unpadded URL-safe base64, producing a 32 character
/// string that can be embedded in links without escaping. Tokens carry no structure; the
/// database row they point at holds the family, issuer, and expiry.
pub fn generate_invite_token() -> String {
    let mut bytes = [0u8; INVITE_TOKEN_BYTES];
    rand::rng().fill(&mut bytes[..]);

    URL_SAFE_NO_PAD.encode(bytes)
}
