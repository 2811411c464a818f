//! Per-request session randomization.
//!
//! The upstream's bot detection fingerprints repeated cookie jars and
//! correlation IDs, so every request carries a freshly generated session
//! cookie header and request ID. The values carry no semantic meaning and
//! must never be reused across calls.
//!
//! All helpers take an explicit `&mut impl Rng` so tests can drive them from
//! a seeded [`rand::rngs::StdRng`].

use rand::Rng;
use uuid::Uuid;

const ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const UPPER_ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a platform product identifier (FSN).
pub const FSN_LEN: usize = 16;

/// Returns a random alphanumeric string of `len` chars. With `uppercase`,
/// draws from uppercase letters and digits only (the FSN alphabet).
pub fn random_alnum<R: Rng + ?Sized>(rng: &mut R, len: usize, uppercase: bool) -> String {
    let chars = if uppercase { UPPER_ALNUM } else { ALNUM };
    (0..len)
        .map(|_| chars[rng.random_range(0..chars.len())] as char)
        .collect()
}

/// Builds a `Cookie` header value of `pairs` random `name=value` pairs.
pub fn random_cookie_header<R: Rng + ?Sized>(
    rng: &mut R,
    pairs: usize,
    name_len: usize,
    value_len: usize,
) -> String {
    (0..pairs)
        .map(|_| {
            format!(
                "{}={}",
                random_alnum(rng, name_len, false),
                random_alnum(rng, value_len, false)
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Returns a syntactically valid random FSN.
pub fn random_fsn<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_alnum(rng, FSN_LEN, true)
}

/// Builds a per-request correlation ID: a random UUID joined to the FSN with
/// a dot. Falls back to a random FSN when none is supplied.
pub fn random_request_id<R: Rng + ?Sized>(rng: &mut R, fsn: Option<&str>) -> String {
    let uuid: Uuid = uuid::Builder::from_random_bytes(rng.random()).into_uuid();
    match fsn {
        Some(fsn) => format!("{uuid}.{fsn}"),
        None => format!("{uuid}.{}", random_fsn(rng)),
    }
}
