use std::io::{self, Read};

/// Control bytes the archive export is known to leak into otherwise
/// well-formed markup. Both are rewritten to spaces before the markup parser
/// sees them.
const CORRUPT_BYTES: [u8; 2] = [0x10, 0x03];

/// `Read` adapter that rewrites the two known corrupting control bytes to
/// ASCII spaces.
///
/// The rewrite happens on the raw byte stream, before any structural parsing,
/// so the markup parser never observes the offending bytes regardless of
/// where they appear in the document.
#[derive(Debug)]
pub struct SanitizingReader<R> {
    inner: R,
}

impl<R: Read> SanitizingReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read> Read for SanitizingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for byte in &mut buf[..n] {
            if CORRUPT_BYTES.contains(byte) {
                *byte = b' ';
            }
        }
        Ok(n)
    }
}
