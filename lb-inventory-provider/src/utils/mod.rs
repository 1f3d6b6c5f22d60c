//! Utility modules.

/// Timestamp serialization helpers for Cloudflare `created_on` / `modified_on` fields.
pub mod datetime;

/// Log sanitization utilities to keep secrets and large bodies out of logs.
pub mod log_sanitizer;
