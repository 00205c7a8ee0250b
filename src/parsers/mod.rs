//! Streaming extraction of messages from the archive markup.
//!
//! # Error Handling Strategy
//!
//! This module distinguishes two failure classes:
//!
//! - **Structural-integrity violations**: a message boundary reached with no
//!   captured timestamp, or before any thread marker, means the document does
//!   not satisfy the element-interleaving contract the state machine relies
//!   on. These are fatal - the record iterator yields the error and nothing
//!   after it. Silently skipping would produce tables that look complete but
//!   aren't.
//!
//! - **Encoding anomalies**: names containing characters outside ASCII are
//!   recovered locally by escaping them as decimal character references (see
//!   [`normalize`]), never fatal. Two known corrupting control bytes are
//!   rewritten to spaces before the markup parser sees them (see
//!   [`sanitize`]).
//!
//! Errors use `anyhow::Result` with context. Since this is a binary/CLI tool
//! (not a library), errors are boxed and consumers don't match on error types.

pub mod archive;
pub mod normalize;
pub mod sanitize;
pub mod timestamp;

pub use archive::{ArchiveParser, open_archive};
pub use normalize::normalize_name;
pub use sanitize::SanitizingReader;
pub use timestamp::parse_archive_timestamp;
