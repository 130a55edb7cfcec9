//! Per-connection request/response loop
//!
//! One call to [`handle_connection`] owns a connection from accept to
//! close: parse a request, dispatch it, write the response, then either
//! loop for the next request or stop. Keep-alive is the default; the loop
//! ends on peer disconnect, an explicit `Connection: close`, or an error.

use crate::config::ServerConfig;
use crate::http::{parser, writer, MessageReader, Result};
use crate::routes;
use std::io::{Read, Write};
use tracing::debug;

/// Serve requests from one connection until it ends
///
/// A clean disconnect between requests returns Ok. A malformed request or
/// an I/O failure returns the error and abandons the connection without a
/// further response, leaving the socket to be dropped by the caller.
pub fn handle_connection<S: Read + Write>(stream: S, config: &ServerConfig) -> Result<()> {
    let mut reader = MessageReader::new(stream);

    while let Some(request) = parser::parse_next(&mut reader)? {
        let close = request.connection_close();
        debug!(method = %request.method(), path = request.path(), "request");

        let response = routes::dispatch(&request, config);
        debug!(status = %response.status(), "response");

        writer::write_response(reader.get_mut(), &response)?;

        if close {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// In-memory stand-in for a socket
    struct MockStream {
        input: Cursor<Vec<u8>>,
        output: Vec<u8>,
    }

    impl MockStream {
        fn with_input(input: &[u8]) -> Self {
            MockStream {
                input: Cursor::new(input.to_vec()),
                output: Vec::new(),
            }
        }
    }

    impl Read for MockStream {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.input.read(buf)
        }
    }

    impl Write for MockStream {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.output.write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn no_files() -> ServerConfig {
        ServerConfig::new(None)
    }

    #[test]
    fn test_single_request() {
        let mut stream = MockStream::with_input(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n");
        handle_connection(&mut stream, &no_files()).unwrap();

        assert_eq!(stream.output, b"HTTP/1.1 200 OK\r\n\r\n");
    }

    #[test]
    fn test_keep_alive_serves_multiple_requests() {
        let mut stream = MockStream::with_input(
            b"GET /echo/one HTTP/1.1\r\n\r\nGET /echo/two HTTP/1.1\r\n\r\n",
        );
        handle_connection(&mut stream, &no_files()).unwrap();

        let output = String::from_utf8(stream.output).unwrap();
        assert_eq!(output.matches("HTTP/1.1 200 OK").count(), 2);
        assert!(output.contains("one"));
        assert!(output.contains("two"));
    }

    #[test]
    fn test_connection_close_stops_the_loop() {
        let mut stream = MockStream::with_input(
            b"GET /echo/first HTTP/1.1\r\nConnection: close\r\n\r\nGET /echo/second HTTP/1.1\r\n\r\n",
        );
        handle_connection(&mut stream, &no_files()).unwrap();

        let output = String::from_utf8(stream.output).unwrap();
        assert_eq!(output.matches("HTTP/1.1 200 OK").count(), 1);
        assert!(output.contains("Connection: close"));
        assert!(!output.contains("second"));
    }

    #[test]
    fn test_empty_stream_is_clean_close() {
        let mut stream = MockStream::with_input(b"");
        handle_connection(&mut stream, &no_files()).unwrap();

        assert!(stream.output.is_empty());
    }

    #[test]
    fn test_malformed_request_line_errors_without_response() {
        let mut stream = MockStream::with_input(b"NONSENSE\r\n\r\n");
        let result = handle_connection(&mut stream, &no_files());

        assert!(result.is_err());
        assert!(stream.output.is_empty());
    }

    #[test]
    fn test_unconsumed_body_does_not_break_framing() {
        // POST to an unmapped route carries a body no handler reads; the
        // next request on the connection must still parse from the right
        // offset.
        let mut stream = MockStream::with_input(
            b"POST /nowhere HTTP/1.1\r\nContent-Length: 5\r\n\r\nhelloGET / HTTP/1.1\r\n\r\n",
        );
        handle_connection(&mut stream, &no_files()).unwrap();

        let output = String::from_utf8(stream.output).unwrap();
        assert!(output.starts_with("HTTP/1.1 404 Not Found\r\n\r\n"));
        assert!(output.ends_with("HTTP/1.1 200 OK\r\n\r\n"));
    }
}
