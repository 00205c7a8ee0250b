use std::io::Write;

use anyhow::Result;

use crate::models::{IdentifierMap, MessageRecord};

/// Message table file name, written next to the archive by default.
pub const MESSAGES_FILE: &str = "messages-text.tsv";
/// User lookup table file name.
pub const USERS_FILE: &str = "messages-users.tsv";
/// Thread lookup table file name.
pub const THREADS_FILE: &str = "messages-threads.tsv";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Streaming TSV writer for the message table.
///
/// The text column is emitted as a single JSON string token so embedded tabs,
/// newlines, and quotes cannot corrupt the row.
pub struct MessageTableWriter<W: Write> {
    out: W,
}

impl<W: Write> MessageTableWriter<W> {
    /// Wrap `out` and write the header row.
    pub fn new(mut out: W) -> Result<Self> {
        out.write_all(b"thread_id\tuser_id\ttimestamp\ttext\n")?;
        Ok(Self { out })
    }

    pub fn write_record(&mut self, record: &MessageRecord) -> Result<()> {
        writeln!(
            self.out,
            "{}\t{}\t{}\t{}",
            record.thread_id,
            record.user_id,
            record.timestamp.format(TIMESTAMP_FORMAT),
            serde_json::to_string(&record.text)?,
        )?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Write a two-column name/id lookup table in first-seen order.
pub fn write_lookup_table<W: Write>(
    mut out: W,
    name_column: &str,
    id_column: &str,
    map: &IdentifierMap,
) -> Result<()> {
    writeln!(out, "{name_column}\t{id_column}")?;
    for (name, id) in map.iter() {
        writeln!(out, "{name}\t{id}")?;
    }
    out.flush()?;
    Ok(())
}
