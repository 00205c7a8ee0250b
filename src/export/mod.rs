//! Record emitter: drives the extraction state machine to exhaustion and
//! serializes the three output tables.
//!
//! This module owns no parsing logic - it is pure sequencing, counting, and
//! timing. Messages stream straight into `messages-text.tsv` as they are
//! produced; the user and thread lookup tables are written afterwards from
//! the identifier-map snapshots, in first-seen order. Progress and the final
//! summary go to stderr, throttled to at most one update per second.

pub mod progress;
pub mod writer;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::parsers::archive::open_archive;

pub use progress::ProgressReporter;
pub use writer::{
    MESSAGES_FILE, MessageTableWriter, THREADS_FILE, USERS_FILE, write_lookup_table,
};

/// Summary of a completed export run.
#[derive(Debug, Clone)]
pub struct ExportStats {
    pub messages: usize,
    pub users: usize,
    pub threads: usize,
    pub elapsed: Duration,
}

/// Convert `archive_file` into the three TSV tables under `out_dir`.
///
/// The message table streams to disk while parsing; the lookup tables are
/// written once the record stream is exhausted. A confirmation line per file
/// is printed to stderr.
///
/// # Errors
///
/// Returns an error if the archive cannot be opened or parsed, if a message
/// boundary violates the expected element interleaving (missing timestamp or
/// thread context), or if any output file cannot be created or written. There
/// is no retry logic; a failed run leaves any partial output behind.
pub fn export_archive(archive_file: &Path, out_dir: &Path) -> Result<ExportStats> {
    let mut parser = open_archive(archive_file)?;

    let messages_path = out_dir.join(MESSAGES_FILE);
    let messages_out = File::create(&messages_path)
        .with_context(|| format!("Failed to create output file: {}", messages_path.display()))?;
    let mut table = MessageTableWriter::new(BufWriter::new(messages_out))?;

    let mut progress = ProgressReporter::new();
    let mut count = 0usize;
    for record in &mut parser {
        let record = record?;
        table.write_record(&record)?;
        count += 1;
        progress.record(count);
    }
    table.finish()
        .with_context(|| format!("Failed to write output file: {}", messages_path.display()))?;
    let elapsed = progress.finish(count);
    eprintln!("    {}", messages_path.display());

    let (users, threads) = parser.into_maps();

    let users_path = out_dir.join(USERS_FILE);
    let users_out = File::create(&users_path)
        .with_context(|| format!("Failed to create output file: {}", users_path.display()))?;
    write_lookup_table(BufWriter::new(users_out), "user_name", "user_id", &users)?;
    eprintln!("    {}", users_path.display());

    let threads_path = out_dir.join(THREADS_FILE);
    let threads_out = File::create(&threads_path)
        .with_context(|| format!("Failed to create output file: {}", threads_path.display()))?;
    write_lookup_table(BufWriter::new(threads_out), "thread_name", "thread_id", &threads)?;
    eprintln!("    {}", threads_path.display());

    Ok(ExportStats { messages: count, users: users.len(), threads: threads.len(), elapsed })
}
