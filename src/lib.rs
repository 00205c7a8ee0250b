//! fb-archive-export - Convert a Facebook message archive into flat TSV tables
//!
//! This library converts the `messages.html` file from a Facebook data export
//! into three tab-separated tables: one row per message, plus user-id and
//! thread-id lookup tables. It supports:
//!
//! - Streaming one-pass extraction of messages from the markup event stream
//! - First-seen-order integer id assignment for user and thread names
//! - Sanitization of two control bytes the export format is known to leak
//! - Throttled progress reporting on stderr for large archives
//!
//! Known limitation: a record is only closed when the *next* message boundary
//! is seen, so content trailing the last boundary in the document is never
//! emitted.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use fb_archive_export::export_archive;
//!
//! let archive = Path::new("html/messages.html");
//! let stats = export_archive(archive, Path::new("out"))?;
//! eprintln!("exported {} messages", stats.messages);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod export;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use export::{ExportStats, export_archive};
pub use models::{IdentifierMap, MessageRecord, ThreadId, UserId};
pub use parsers::archive::{ArchiveParser, open_archive};
