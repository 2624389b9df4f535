//! Utility modules.

/// Log sanitization utilities to keep access keys and record payloads out of logs.
pub mod log_sanitizer;
