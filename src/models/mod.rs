//! Data models for Facebook message archive extraction.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`MessageRecord`] - A fully assembled message from the archive
//! - [`IdentifierMap`] - First-seen-order name-to-integer assignment table
//! - [`UserId`] / [`ThreadId`] - Integer identifiers assigned during a parse run

pub mod ids;
pub mod message;

pub use ids::IdentifierMap;
pub use message::{MessageRecord, ThreadId, UserId};
