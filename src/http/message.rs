//! HTTP message types
//!
//! This module defines the core types for HTTP requests and responses.

use super::{Headers, RequestHeaders, CRLF};
use bytes::Bytes;
use std::fmt;

/// HTTP methods
///
/// Tokens outside the RFC set are carried through as [`Method::Other`] so the
/// router can send them to the 404 fallback instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
    Other(String),
}

impl Method {
    /// Parse a method token; unknown tokens are preserved, never rejected
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "CONNECT" => Method::Connect,
            "OPTIONS" => Method::Options,
            "TRACE" => Method::Trace,
            "PATCH" => Method::Patch,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convert method to its wire token
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Connect => "CONNECT",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
            Method::Patch => "PATCH",
            Method::Other(s) => s,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// HTTP status codes
///
/// The closed set of statuses this server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Created,
    NotFound,
    InternalServerError,
}

impl Status {
    /// Numeric status code
    pub fn code(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Created => 201,
            Status::NotFound => 404,
            Status::InternalServerError => 500,
        }
    }

    /// Canonical reason phrase
    pub fn reason(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Created => "Created",
            Status::NotFound => "Not Found",
            Status::InternalServerError => "Internal Server Error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// A parsed HTTP request
///
/// Built once per parse cycle and immutable afterwards. The path is the raw
/// request target: route matching happens on it unmodified, with no
/// percent-decoding anywhere. The body holds exactly the bytes the peer sent
/// (possibly fewer than declared, if it closed early).
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    headers: RequestHeaders,
    body: Bytes,
}

impl Request {
    /// Assemble a request from parsed parts
    pub fn new(
        method: Method,
        path: impl Into<String>,
        headers: RequestHeaders,
        body: Bytes,
    ) -> Self {
        Request {
            method,
            path: path.into(),
            headers,
            body,
        }
    }

    /// Get the request method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the raw request target
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the recognized headers
    pub fn headers(&self) -> &RequestHeaders {
        &self.headers
    }

    /// Get the body bytes
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Whether the request asked for the connection to close
    pub fn connection_close(&self) -> bool {
        self.headers.connection_close()
    }
}

/// An HTTP response
///
/// Status plus ordered headers plus raw body bytes. Built by a route handler,
/// serialized exactly once by the writer. Header order is preserved through
/// to the wire.
#[derive(Debug, Clone)]
pub struct Response {
    status: Status,
    headers: Headers,
    body: Bytes,
}

impl Response {
    /// Create a bare response: status line only, no headers, no body
    pub fn new(status: Status) -> Self {
        Response {
            status,
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    /// Create a builder for constructing responses
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    /// Get the status
    pub fn status(&self) -> Status {
        self.status
    }

    /// Get the headers
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Get mutable headers
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Get the body
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Convert the response to wire format
    pub fn to_wire(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(64 + self.body.len());

        // Status line
        buf.extend_from_slice(b"HTTP/1.1 ");
        buf.extend_from_slice(self.status.code().to_string().as_bytes());
        buf.push(b' ');
        buf.extend_from_slice(self.status.reason().as_bytes());
        buf.extend_from_slice(CRLF.as_bytes());

        // Headers, in insertion order
        for (name, value) in self.headers.iter() {
            buf.extend_from_slice(name.as_bytes());
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(value.as_bytes());
            buf.extend_from_slice(CRLF.as_bytes());
        }

        // Empty line
        buf.extend_from_slice(CRLF.as_bytes());

        // Body
        buf.extend_from_slice(&self.body);

        buf
    }
}

/// Builder for HTTP responses
#[derive(Debug)]
pub struct ResponseBuilder {
    status: Status,
    headers: Headers,
    body: Bytes,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        ResponseBuilder {
            status: Status::Ok,
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }
}

impl ResponseBuilder {
    /// Set the status
    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Build the response
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}
