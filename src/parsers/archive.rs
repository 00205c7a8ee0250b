use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDateTime;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::models::{IdentifierMap, MessageRecord, ThreadId};
use crate::parsers::normalize::normalize_name;
use crate::parsers::sanitize::SanitizingReader;
use crate::parsers::timestamp::parse_archive_timestamp;

/// The message currently being assembled, threaded across element boundaries.
///
/// `user` and `date` are reset after every boundary; `thread` is sticky and
/// persists until the next thread marker.
#[derive(Debug, Default)]
struct Cursor {
    user: Option<String>,
    date: Option<NaiveDateTime>,
    thread: Option<ThreadId>,
}

/// Text accumulation for a marker whose value spans to its end tag.
///
/// Only the element's immediate text counts: `frozen` is set once a child
/// element appears, and `depth` tracks nesting so the matching end tag is
/// recognized.
#[derive(Debug, Default)]
struct SpanCapture {
    buf: String,
    depth: usize,
    frozen: bool,
}

/// Which marker's text the state machine is currently collecting.
#[derive(Debug)]
enum Capture {
    /// Thread display name: the first text node after the thread marker.
    ThreadName,
    /// Author name, assigned to the cursor at the marker's end tag.
    User(SpanCapture),
    /// Timestamp text, parsed at the marker's end tag.
    Meta(SpanCapture),
    /// Body of the record being closed at this paragraph boundary. The close
    /// is deferred until the paragraph's immediate text is known.
    Body,
}

/// Streaming extraction state machine over the archive's markup events.
///
/// Walks the event stream once and yields a [`MessageRecord`] each time a new
/// message boundary closes the previous in-progress message. The two
/// identifier maps grow monotonically as a side effect and can be taken with
/// [`into_maps`](ArchiveParser::into_maps) once the stream is exhausted.
///
/// The sequence is lazy, finite, and non-restartable: the first error ends
/// it, and content trailing the last boundary is never emitted (see crate
/// docs for this documented limitation).
pub struct ArchiveParser<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    cursor: Cursor,
    capture: Option<Capture>,
    users: IdentifierMap,
    threads: IdentifierMap,
    emitted: usize,
    done: bool,
}

/// Open an archive file for streaming extraction, sanitizing the raw bytes
/// on the way in.
pub fn open_archive(path: &Path) -> Result<ArchiveParser<BufReader<SanitizingReader<File>>>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open archive file: {}", path.display()))?;
    Ok(ArchiveParser::new(BufReader::new(SanitizingReader::new(file))))
}

impl<R: BufRead> ArchiveParser<R> {
    pub fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.config_mut().trim_text(false);
        Self {
            reader,
            buf: Vec::new(),
            cursor: Cursor::default(),
            capture: None,
            users: IdentifierMap::new(),
            threads: IdentifierMap::new(),
            emitted: 0,
            done: false,
        }
    }

    /// User names seen so far, in first-seen order.
    pub fn user_map(&self) -> &IdentifierMap {
        &self.users
    }

    /// Thread names seen so far, in first-seen order.
    pub fn thread_map(&self) -> &IdentifierMap {
        &self.threads
    }

    /// Consume the parser, returning the `(users, threads)` map snapshots for
    /// lookup-table serialization.
    pub fn into_maps(self) -> (IdentifierMap, IdentifierMap) {
        (self.users, self.threads)
    }

    fn handle_event(&mut self, event: Event<'_>) -> Result<Option<MessageRecord>> {
        match event {
            Event::Start(e) => self.on_start(&e),
            Event::Empty(e) => {
                // Self-closing element: open and close in one step.
                let opened = self.on_start(&e)?;
                let closed = self.on_end()?;
                Ok(opened.or(closed))
            }
            Event::End(_) => self.on_end(),
            Event::Text(e) => {
                if self.capture.is_none() {
                    return Ok(None);
                }
                let text = e
                    .unescape()
                    .with_context(|| format!("bad text at byte {}", self.reader.buffer_position()))?;
                self.on_text(&text)
            }
            Event::CData(e) => {
                if self.capture.is_none() {
                    return Ok(None);
                }
                let text = String::from_utf8_lossy(&e).into_owned();
                self.on_text(&text)
            }
            // Declarations, comments, processing instructions, doctypes
            _ => Ok(None),
        }
    }

    fn on_start(&mut self, e: &BytesStart<'_>) -> Result<Option<MessageRecord>> {
        // A child element terminates the immediate text content of whatever
        // marker is currently being captured.
        let mut emitted = None;
        match self.capture.take() {
            Some(Capture::Body) => {
                emitted = self.close_boundary(None)?;
            }
            Some(Capture::ThreadName) => {
                let id = self.threads.resolve(&normalize_name(""));
                self.cursor.thread = Some(id);
            }
            Some(Capture::User(mut span)) => {
                span.depth += 1;
                span.frozen = true;
                self.capture = Some(Capture::User(span));
            }
            Some(Capture::Meta(mut span)) => {
                span.depth += 1;
                span.frozen = true;
                self.capture = Some(Capture::Meta(span));
            }
            None => {}
        }

        if e.name().as_ref() == b"p" {
            // Paragraph boundary: it supplies the body text of the record it
            // closes, so the close waits for the immediate text.
            self.capture = Some(Capture::Body);
            return Ok(emitted);
        }

        match class_attr(e).as_deref() {
            Some(b"message") => {
                let closed = self.close_boundary(None)?;
                Ok(emitted.or(closed))
            }
            Some(b"thread") => {
                self.capture = Some(Capture::ThreadName);
                Ok(emitted)
            }
            Some(b"user") => {
                self.capture = Some(Capture::User(SpanCapture::default()));
                Ok(emitted)
            }
            Some(b"meta") => {
                self.capture = Some(Capture::Meta(SpanCapture::default()));
                Ok(emitted)
            }
            _ => Ok(emitted),
        }
    }

    fn on_text(&mut self, text: &str) -> Result<Option<MessageRecord>> {
        match self.capture.take() {
            Some(Capture::Body) => self.close_boundary(Some(text.to_string())),
            Some(Capture::ThreadName) => {
                let id = self.threads.resolve(&normalize_name(text));
                self.cursor.thread = Some(id);
                Ok(None)
            }
            Some(Capture::User(mut span)) => {
                if span.depth == 0 && !span.frozen {
                    span.buf.push_str(text);
                }
                self.capture = Some(Capture::User(span));
                Ok(None)
            }
            Some(Capture::Meta(mut span)) => {
                if span.depth == 0 && !span.frozen {
                    span.buf.push_str(text);
                }
                self.capture = Some(Capture::Meta(span));
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn on_end(&mut self) -> Result<Option<MessageRecord>> {
        match self.capture.take() {
            // Empty paragraph: the boundary still closes, with no body text.
            Some(Capture::Body) => self.close_boundary(None),
            // Thread marker with no name text at all.
            Some(Capture::ThreadName) => {
                let id = self.threads.resolve(&normalize_name(""));
                self.cursor.thread = Some(id);
                Ok(None)
            }
            Some(Capture::User(mut span)) => {
                if span.depth > 0 {
                    span.depth -= 1;
                    self.capture = Some(Capture::User(span));
                } else {
                    self.cursor.user = Some(normalize_name(&span.buf));
                }
                Ok(None)
            }
            Some(Capture::Meta(mut span)) => {
                if span.depth > 0 {
                    span.depth -= 1;
                    self.capture = Some(Capture::Meta(span));
                    return Ok(None);
                }
                self.cursor.date = if span.buf.is_empty() {
                    None
                } else {
                    Some(parse_archive_timestamp(&span.buf)?)
                };
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Close the pending message at a boundary, if one is pending, and reset
    /// the cursor for the next record. The thread context is left alone.
    fn close_boundary(&mut self, body: Option<String>) -> Result<Option<MessageRecord>> {
        let record = match self.cursor.user.take() {
            None => None,
            Some(user) => {
                let timestamp = self.cursor.date.ok_or_else(|| {
                    anyhow!(
                        "message boundary after record {} has no timestamp; archive elements are out of order",
                        self.emitted
                    )
                })?;
                let thread_id = self.cursor.thread.ok_or_else(|| {
                    anyhow!("message boundary after record {} precedes any thread marker", self.emitted)
                })?;
                let user_id = self.users.resolve(&user);
                self.emitted += 1;
                Some(MessageRecord { thread_id, user_id, timestamp, text: body.unwrap_or_default() })
            }
        };
        self.cursor.date = None;
        Ok(record)
    }
}

impl<R: BufRead> Iterator for ArchiveParser<R> {
    type Item = Result<MessageRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut buf = mem::take(&mut self.buf);
        let outcome = loop {
            buf.clear();
            let step = match self.reader.read_event_into(&mut buf) {
                Ok(Event::Eof) => {
                    // Anything still in progress after the last boundary is
                    // dropped here; only the next boundary closes a record.
                    self.done = true;
                    break None;
                }
                Ok(event) => self.handle_event(event),
                Err(e) => Err(anyhow!(e).context(format!(
                    "malformed markup at byte {}",
                    self.reader.buffer_position()
                ))),
            };
            match step {
                Ok(None) => continue,
                Ok(Some(record)) => break Some(Ok(record)),
                Err(e) => {
                    self.done = true;
                    break Some(Err(e));
                }
            }
        };
        self.buf = buf;
        outcome
    }
}

fn class_attr(e: &BytesStart<'_>) -> Option<Vec<u8>> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"class")
        .map(|attr| attr.value.into_owned())
}
