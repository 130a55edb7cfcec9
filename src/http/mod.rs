//! HTTP/1.1 wire handling for minihttpd
//!
//! This module implements the small slice of HTTP/1.1 the server speaks, by
//! hand, over raw byte streams: buffered request reading, request parsing,
//! response serialization, and gzip content negotiation.
//!
//! # Architecture
//!
//! One buffered reader serves two views of the same stream:
//!
//! - `MessageReader::read_line` gives the line-oriented text view used for
//!   the request line and headers
//! - `MessageReader::read_exact_bytes` gives the raw byte view used for
//!   request bodies
//!
//! Both draw from a single buffer, so bytes read ahead while scanning for a
//! line ending are never lost to a following body read and binary uploads
//! round-trip unmodified.
//!
//! # Examples
//!
//! ```
//! use minihttpd::http::{parser, MessageReader, Method};
//!
//! let raw = b"GET /echo/hi HTTP/1.1\r\nHost: localhost\r\n\r\n";
//! let mut reader = MessageReader::new(&raw[..]);
//!
//! let request = parser::parse_next(&mut reader).unwrap().unwrap();
//! assert_eq!(request.method(), &Method::Get);
//! assert_eq!(request.path(), "/echo/hi");
//! ```

pub mod encoding;
pub mod headers;
pub mod message;
pub mod parser;
pub mod reader;
pub mod writer;

pub use encoding::Encoding;
pub use headers::{Headers, RequestHeader, RequestHeaders};
pub use message::{Method, Request, Response, Status};
pub use reader::MessageReader;

/// Result type for HTTP operations
pub type Result<T> = std::result::Result<T, Error>;

/// HTTP operation errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// CRLF line ending
pub const CRLF: &str = "\r\n";
