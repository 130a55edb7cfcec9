//! HTTP header handling
//!
//! Two collections with different jobs live here. [`Headers`] is the
//! response-side collection: it preserves insertion order because that order
//! is also emission order on the wire (`Content-Encoding` must come before
//! `Content-Type` and `Content-Length`). [`RequestHeaders`] is the
//! request-side view: only a closed set of four names is ever consumed, so
//! classification is a tagged enum and everything else is dropped after
//! parsing.

/// Response headers collection
///
/// Headers are stored in insertion order and looked up case-insensitively.
#[derive(Debug, Clone)]
pub struct Headers {
    headers: Vec<(String, String)>,
}

impl Headers {
    /// Create a new empty headers collection
    pub fn new() -> Self {
        Headers {
            headers: Vec::new(),
        }
    }

    /// Append a header, keeping insertion order
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// Get the first value for a header (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Check if a header is present (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// Get the number of headers
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Check if there are no headers
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterate over all headers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl Default for Headers {
    fn default() -> Self {
        Self::new()
    }
}

/// The request headers this server consumes
///
/// Classification happens against this closed set; any other header on a
/// request is parsed far enough to keep framing aligned, then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestHeader {
    UserAgent,
    ContentLength,
    AcceptEncoding,
    Connection,
}

/// Name-to-header mapping for [`RequestHeader::recognize`]
const RECOGNIZED: [(&str, RequestHeader); 4] = [
    ("User-Agent", RequestHeader::UserAgent),
    ("Content-Length", RequestHeader::ContentLength),
    ("Accept-Encoding", RequestHeader::AcceptEncoding),
    ("Connection", RequestHeader::Connection),
];

impl RequestHeader {
    /// Classify a header name, case-insensitively
    pub fn recognize(name: &str) -> Option<Self> {
        RECOGNIZED
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, h)| *h)
    }

    /// Canonical name of this header
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestHeader::UserAgent => "User-Agent",
            RequestHeader::ContentLength => "Content-Length",
            RequestHeader::AcceptEncoding => "Accept-Encoding",
            RequestHeader::Connection => "Connection",
        }
    }
}

/// Recognized header values for one request
///
/// Values are trimmed when recorded. `User-Agent` keeps its bytes verbatim;
/// `Accept-Encoding` and `Connection` have case-insensitive semantics and are
/// stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct RequestHeaders {
    user_agent: Option<String>,
    content_length: Option<String>,
    accept_encoding: Option<String>,
    connection: Option<String>,
}

impl RequestHeaders {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one header line's name and value
    ///
    /// Returns whether the name was recognized; unrecognized names are
    /// dropped. A later occurrence of the same name replaces the earlier one.
    pub fn record(&mut self, name: &str, value: &str) -> bool {
        let Some(header) = RequestHeader::recognize(name) else {
            return false;
        };
        let value = value.trim();
        match header {
            RequestHeader::UserAgent => self.user_agent = Some(value.to_string()),
            RequestHeader::ContentLength => self.content_length = Some(value.to_string()),
            RequestHeader::AcceptEncoding => {
                self.accept_encoding = Some(value.to_ascii_lowercase())
            }
            RequestHeader::Connection => self.connection = Some(value.to_ascii_lowercase()),
        }
        true
    }

    /// `User-Agent` value, verbatim
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// `Accept-Encoding` value, lowercased
    pub fn accept_encoding(&self) -> Option<&str> {
        self.accept_encoding.as_deref()
    }

    /// Declared body length
    ///
    /// An absent or unparsable `Content-Length` counts as zero, never as an
    /// error.
    pub fn content_length(&self) -> usize {
        self.content_length
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Whether the request asked for the connection to close
    pub fn connection_close(&self) -> bool {
        self.connection.as_deref() == Some("close")
    }
}
