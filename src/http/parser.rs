//! HTTP request parsing
//!
//! This module pulls one request at a time off a [`MessageReader`]: the
//! request line, header lines up to the blank separator, then a
//! Content-Length body when one was announced.

use super::reader::MessageReader;
use super::{Error, Method, Request, RequestHeaders, Result};
use bytes::Bytes;
use std::io::Read;

/// Parse an HTTP request line
///
/// Format: METHOD TARGET VERSION\r\n
/// Example: GET /index.html HTTP/1.1\r\n
///
/// Tokens are split on runs of whitespace. The version token is accepted
/// as-is and may be missing; a line with fewer than two tokens is malformed.
pub fn parse_request_line(line: &str) -> Result<(Method, String)> {
    let mut parts = line.split_whitespace();

    let method = match parts.next() {
        Some(token) => Method::parse(token),
        None => return Err(Error::Parse("empty request line".to_string())),
    };
    let target = match parts.next() {
        Some(token) => token.to_string(),
        None => {
            return Err(Error::Parse(format!(
                "request line has no target: {line:?}"
            )))
        }
    };

    Ok((method, target))
}

/// Pull the next request off the stream
///
/// Returns Ok(Some(request)) when a full request was read, Ok(None) when
/// the peer closed the connection before sending one, or Err on a
/// malformed request line.
///
/// Header lines without a colon are skipped. The body is read eagerly when
/// Content-Length announces one; a stream that closes early yields the
/// bytes that did arrive.
pub fn parse_next<R: Read>(reader: &mut MessageReader<R>) -> Result<Option<Request>> {
    // Tolerate stray blank lines ahead of the request line, as some clients
    // send an extra CRLF after a previous body.
    let request_line = loop {
        match reader.read_line()? {
            Some(line) if line.is_empty() => continue,
            Some(line) => break line,
            None => return Ok(None),
        }
    };

    let (method, target) = parse_request_line(&request_line)?;

    let mut headers = RequestHeaders::new();
    while let Some(line) = reader.read_line()? {
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.record(name, value);
        }
    }

    let body = match headers.content_length() {
        0 => Bytes::new(),
        n => Bytes::from(reader.read_exact_bytes(n)?),
    };

    Ok(Some(Request::new(method, target, headers, body)))
}
