use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Write;

pub const NO_STORE_DIRECTIVES: &str = "no-cache, no-store, must-revalidate";

/// Content-derived validation token: sha2 over the serialized body, first
/// eight bytes as lower-hex, rendered quoted. Stable across identical
/// bodies; not meant to be cryptographically meaningful.
pub fn etag_for(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body);
    let hash = hasher.finalize();

    let mut tag = String::with_capacity(18);
    tag.push('"');
    for byte in &hash[..8] {
        let _ = write!(tag, "{byte:02x}");
    }
    tag.push('"');
    tag
}

/// Freshness check against a previously issued token. The header may carry
/// a comma-separated token list or `*`, per RFC 9110.
pub fn is_fresh(if_none_match: Option<&str>, etag: &str) -> bool {
    let Some(header) = if_none_match else {
        return false;
    };
    header
        .split(',')
        .map(str::trim)
        .any(|token| token == "*" || token == etag)
}

pub fn cached_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    etag: &str,
    max_age_secs: u64,
) -> Response {
    (
        status,
        [
            (
                header::CACHE_CONTROL,
                format!("public, max-age={max_age_secs}"),
            ),
            (header::ETAG, etag.to_string()),
        ],
        Json(body),
    )
        .into_response()
}

pub fn no_cache_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [
            (header::CACHE_CONTROL, NO_STORE_DIRECTIVES.to_string()),
            (header::PRAGMA, "no-cache".to_string()),
            (header::EXPIRES, "0".to_string()),
        ],
        Json(body),
    )
        .into_response()
}

/// Empty-body outcome for a conditional read whose token still matches.
pub fn not_modified(etag: &str, max_age_secs: u64) -> Response {
    (
        StatusCode::NOT_MODIFIED,
        [
            (
                header::CACHE_CONTROL,
                format!("public, max-age={max_age_secs}"),
            ),
            (header::ETAG, etag.to_string()),
        ],
    )
        .into_response()
}
