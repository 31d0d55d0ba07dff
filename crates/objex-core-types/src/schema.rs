//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Routing fields
pub const FIELD_NAMESPACE: &str = "namespace";
pub const FIELD_KEY: &str = "key";
pub const FIELD_IDENTIFIER: &str = "identifier";
pub const FIELD_METHOD: &str = "method";

// Collection sizes
pub const FIELD_ROOTS_LEN: &str = "roots_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
