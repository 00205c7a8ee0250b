//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Builder for synthetic message archive documents.
///
/// Produces the same element interleaving the real export uses: thread
/// containers holding message headers (user + meta spans) with the body
/// paragraph following each header as a sibling.
pub struct ArchiveBuilder {
    body: String,
    thread_open: bool,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self { body: String::new(), thread_open: false }
    }

    /// Open a new thread context with the given display name.
    pub fn thread(mut self, name: &str) -> Self {
        if self.thread_open {
            self.body.push_str("</div>\n");
        }
        self.body.push_str(&format!("<div class=\"thread\">{name}"));
        self.thread_open = true;
        self
    }

    /// Append a message header (author + timestamp).
    pub fn message(mut self, user: &str, meta: &str) -> Self {
        self.body.push_str(&format!(
            "<div class=\"message\"><div class=\"message_header\">\
             <span class=\"user\">{user}</span>\
             <span class=\"meta\">{meta}</span>\
             </div></div>\n"
        ));
        self
    }

    /// Append a message body paragraph.
    pub fn body_text(mut self, text: &str) -> Self {
        self.body.push_str(&format!("<p>{text}</p>\n"));
        self
    }

    /// Append raw markup verbatim.
    pub fn raw(mut self, markup: &str) -> Self {
        self.body.push_str(markup);
        self
    }

    /// Render the complete document.
    pub fn build(self) -> String {
        let mut body = self.body;
        if self.thread_open {
            body.push_str("</div>\n");
        }
        format!("<html><body>\n{body}</body></html>\n")
    }

    /// Write the document into `dir` as `messages.html` and return its path.
    pub fn write_to(self, dir: &Path) -> PathBuf {
        let path = dir.join("messages.html");
        fs::write(&path, self.build()).expect("Failed to write messages.html");
        path
    }
}
