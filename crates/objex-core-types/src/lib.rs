//! Core types shared across ObjeX facilities
//!
//! This crate provides foundational types used by the access layer and its
//! logging facility:
//!
//! - **Identifier**: namespace+key value type naming a domain object, plus
//!   the reserved root sentinel
//! - **Schema constants**: canonical field keys and event names for
//!   structured logging

pub mod identifier;
pub mod schema;

pub use identifier::{Identifier, ParseIdentifierError, ROOT_KEY};
