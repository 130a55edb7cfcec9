//! Buffered reading over one byte stream
//!
//! [`MessageReader`] wraps a raw stream and serves the two access patterns
//! request parsing needs: CRLF-terminated text lines for the request line
//! and headers, and exact-length raw byte runs for bodies. Both draw from a
//! single internal buffer, so bytes pulled in while scanning for a line
//! ending stay available to a following body read. Layering a text decoder
//! over the stream for headers and reading the body through it would mangle
//! non-UTF-8 uploads; this type exists to rule that out.

use super::Result;
use std::io::Read;

/// Chunk size for buffer refills and body reads
const READ_CHUNK: usize = 4096;

/// Buffered line- and byte-oriented reader over a raw stream
pub struct MessageReader<R> {
    inner: R,
    buffer: Vec<u8>,
}

impl<R: Read> MessageReader<R> {
    /// Create a reader over a stream
    pub fn new(inner: R) -> Self {
        MessageReader {
            inner,
            buffer: Vec::with_capacity(READ_CHUNK),
        }
    }

    /// Read one line, without its terminator
    ///
    /// Lines end at `\n`; an optional preceding `\r` is stripped. Returns
    /// `None` when the stream is closed before any byte of a new line
    /// arrives. A final line cut off by end-of-stream is returned as a line.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(newline_at) = self.buffer.iter().position(|&b| b == b'\n') {
                let mut line: Vec<u8> = self.buffer.drain(..=newline_at).collect();
                line.pop();
                return Ok(Some(finish_line(line)));
            }

            if self.fill()? == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                let line = std::mem::take(&mut self.buffer);
                return Ok(Some(finish_line(line)));
            }
        }
    }

    /// Read up to `n` raw bytes
    ///
    /// Drains buffered bytes first, then reads from the stream, looping on
    /// partial reads. Stops early only at end-of-stream, so the result may
    /// be shorter than `n`; callers decide what a short body means.
    pub fn read_exact_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        // Capped initial capacity: the length comes off the wire and is not
        // to be trusted with a single up-front allocation.
        let mut out = Vec::with_capacity(n.min(READ_CHUNK));

        let take = n.min(self.buffer.len());
        out.extend(self.buffer.drain(..take));

        while out.len() < n {
            let want = (n - out.len()).min(READ_CHUNK);
            let mut chunk = vec![0u8; want];
            let read = self.inner.read(&mut chunk)?;
            if read == 0 {
                break;
            }
            out.extend_from_slice(&chunk[..read]);
        }

        Ok(out)
    }

    /// Get a mutable reference to the underlying stream
    ///
    /// Writes go directly to the stream; the read buffer is not involved.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Pull the next chunk from the stream into the buffer
    ///
    /// Returns the number of bytes added; zero means end-of-stream.
    fn fill(&mut self) -> Result<usize> {
        let mut chunk = [0u8; READ_CHUNK];
        let n = self.inner.read(&mut chunk)?;
        self.buffer.extend_from_slice(&chunk[..n]);
        Ok(n)
    }
}

/// Strip an optional trailing `\r` and decode the line for header parsing
fn finish_line(mut line: Vec<u8>) -> String {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    String::from_utf8_lossy(&line).into_owned()
}
