use objex_core_types::Identifier;
use thiserror::Error;

use crate::provider::ProviderMethod;

/// Result type alias using ObjexError
pub type Result<T> = std::result::Result<T, ObjexError>;

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the access layer. Each kind maps to a stable error code that can be
/// used for programmatic error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Dispatch (configuration errors, surfaced before any async work)
    NoProvider,
    UnsupportedOperation,
    MutationEngineUnavailable,

    // Provider pass-through
    NotFound,
    Persistence,
    Serialization,

    // Mutation engine pass-through
    Mutation,

    // Internal
    Internal,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NoProvider => "ERR_NO_PROVIDER",
            ErrorKind::UnsupportedOperation => "ERR_UNSUPPORTED_OPERATION",
            ErrorKind::MutationEngineUnavailable => "ERR_MUTATION_ENGINE_UNAVAILABLE",
            ErrorKind::NotFound => "ERR_NOT_FOUND",
            ErrorKind::Persistence => "ERR_PERSISTENCE",
            ErrorKind::Serialization => "ERR_SERIALIZATION",
            ErrorKind::Mutation => "ERR_MUTATION",
            ErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Comprehensive error taxonomy for ObjeX operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObjexError {
    // ===== Dispatch Errors =====
    /// No namespace provider and no fallback provider resolve the identifier
    #[error("No provider matched identifier: {identifier}")]
    NoProviderMatched { identifier: Identifier },

    /// A provider resolved but does not support the requested method
    #[error("Provider for {identifier} does not support operation '{method}'")]
    UnsupportedOperation {
        identifier: Identifier,
        method: ProviderMethod,
    },

    /// Mutation or observation requested with no engine configured
    #[error("No mutation engine configured")]
    MutationEngineUnavailable,

    // ===== Provider Errors =====
    /// Object not found by the resolved provider
    #[error("Object not found: {identifier}")]
    ObjectNotFound { identifier: Identifier },

    /// Backend persistence failure
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    // ===== Mutation Errors =====
    /// Mutation engine failure at a path
    #[error("Mutation failed at path '{path}': {message}")]
    Mutation { path: String, message: String },

    // ===== Generic Errors =====
    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ObjexError {
    /// Get the error kind classification
    pub fn kind(&self) -> ErrorKind {
        match self {
            ObjexError::NoProviderMatched { .. } => ErrorKind::NoProvider,
            ObjexError::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
            ObjexError::MutationEngineUnavailable => ErrorKind::MutationEngineUnavailable,
            ObjexError::ObjectNotFound { .. } => ErrorKind::NotFound,
            ObjexError::Persistence { .. } => ErrorKind::Persistence,
            ObjexError::Serialization { .. } => ErrorKind::Serialization,
            ObjexError::Mutation { .. } => ErrorKind::Mutation,
            ObjexError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

/// Conversion from serde_json::Error to ObjexError
impl From<serde_json::Error> for ObjexError {
    fn from(err: serde_json::Error) -> Self {
        ObjexError::Serialization {
            message: err.to_string(),
        }
    }
}
