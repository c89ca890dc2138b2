//! Opaque identifier and session token generation.

use base64::Engine as _;

/// Length of random bytes before base64 encoding for entity ids.
const ID_LENGTH_BYTES: usize = 9;

/// Length of random bytes before base64 encoding for session tokens.
const TOKEN_LENGTH_BYTES: usize = 24;

/// Generates an opaque entity id (12 URL-safe characters).
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Generates an opaque session token (32 URL-safe characters).
///
/// Tokens are bearer credentials; 24 bytes of entropy make them
/// unguessable in practice.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_session_token() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
