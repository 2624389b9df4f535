//! Log sanitization utilities
//!
//! Challenge tokens and access keys must never be written to logs in full.
//! Response bodies are truncated; secrets are masked down to a short prefix.

/// Maximum number of bytes of a response body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret that may be logged.
const SECRET_VISIBLE_PREFIX: usize = 4;

/// Largest char boundary `<= index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned as is; longer ones are cut at a
/// char boundary and suffixed with the original length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret, keeping only a short prefix for correlation.
///
/// `"abcdef123456"` → `"abcd********"`. Short secrets are fully masked.
pub fn mask_secret(secret: &str) -> String {
    let total = secret.chars().count();
    if total <= SECRET_VISIBLE_PREFIX * 2 {
        return "*".repeat(total);
    }
    let prefix: String = secret.chars().take(SECRET_VISIBLE_PREFIX).collect();
    format!("{prefix}{}", "*".repeat(total - SECRET_VISIBLE_PREFIX))
}
