//! Base-62 short code generation.
//!
//! Codes combine the current epoch millisecond timestamp with a random salt,
//! encoded over a 62-symbol alphabet and truncated to a fixed length.
//! Truncation discards the high-order digits, so uniqueness is probabilistic;
//! callers that need a hard guarantee must check against the link store and
//! regenerate on collision (see `LinkService::create_link`).

use rand::Rng;

/// Digits, lowercase, uppercase. Order matters: it defines digit values.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Fixed length of generated short codes.
pub const CODE_LENGTH: usize = 7;

/// Upper bound (exclusive) of the random salt mixed into the timestamp.
const SALT_RANGE: u64 = 1_000_000;

/// Encodes a non-negative integer in base 62.
///
/// # Examples
///
/// ```
/// use linkpulse::utils::base62::encode_base62;
///
/// assert_eq!(encode_base62(0), "0");
/// assert_eq!(encode_base62(61), "Z");
/// assert_eq!(encode_base62(62), "10");
/// ```
pub fn encode_base62(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut encoded = Vec::new();
    while n > 0 {
        encoded.push(ALPHABET[(n % 62) as usize]);
        n /= 62;
    }
    encoded.reverse();

    String::from_utf8(encoded).expect("alphabet is ASCII")
}

/// Generates a 7-character URL-safe short code.
///
/// Mixes the current timestamp with a random salt for collision resistance,
/// then keeps the low-order 7 base-62 digits to bound output size.
pub fn generate_short_code() -> String {
    let millis = chrono::Utc::now().timestamp_millis() as u64;
    let salt = rand::rng().random_range(0..SALT_RANGE);

    let encoded = encode_base62(millis + salt);

    // Epoch millis encode to more than 7 digits; keep the fast-moving tail.
    let start = encoded.len().saturating_sub(CODE_LENGTH);
    encoded[start..].to_string()
}
