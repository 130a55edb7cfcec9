//! Route dispatch and handlers
//!
//! The route table is fixed: exact `GET /`, prefix `GET /echo/`, exact
//! `GET /user-agent`, prefix `GET /files/`, prefix `POST /files/`, first
//! match wins, anything else is 404. Matching runs on the raw request
//! target; nothing is percent-decoded.

mod files;

use crate::config::ServerConfig;
use crate::http::{Encoding, Method, Request, Response, Status};
use tracing::error;

const ECHO_PREFIX: &str = "/echo/";
const FILES_PREFIX: &str = "/files/";

/// Produce the response for one request
///
/// Runs the route table, then applies the connection-level header rule:
/// a request that asked to close gets `Connection: close` echoed back as
/// the last header, whatever the outcome was.
pub fn dispatch(request: &Request, config: &ServerConfig) -> Response {
    let mut response = route(request, config);

    if request.connection_close() {
        response.headers_mut().insert("Connection", "close");
    }

    response
}

fn route(request: &Request, config: &ServerConfig) -> Response {
    match (request.method(), request.path()) {
        (Method::Get, "/") => Response::new(Status::Ok),
        (Method::Get, path) if path.starts_with(ECHO_PREFIX) => {
            echo(request, &path[ECHO_PREFIX.len()..])
        }
        (Method::Get, "/user-agent") => user_agent(request),
        (Method::Get, path) if path.starts_with(FILES_PREFIX) => {
            files::read(&path[FILES_PREFIX.len()..], config)
        }
        (Method::Post, path) if path.starts_with(FILES_PREFIX) => {
            files::write(&path[FILES_PREFIX.len()..], request.body(), config)
        }
        _ => Response::new(Status::NotFound),
    }
}

/// `GET /echo/{msg}`: reflect the path remainder, gzipped when negotiated
fn echo(request: &Request, message: &str) -> Response {
    let encoding = Encoding::negotiate(request.headers().accept_encoding());

    let body = match encoding.encode(message.as_bytes()) {
        Ok(body) => body,
        Err(err) => {
            error!(error = %err, "body encoding failed");
            return Response::new(Status::InternalServerError);
        }
    };

    let mut builder = Response::builder();
    if encoding == Encoding::Gzip {
        builder = builder.header("Content-Encoding", encoding.as_str());
    }
    builder
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len().to_string())
        .body(body)
        .build()
}

/// `GET /user-agent`: reflect the User-Agent header value, or nothing
fn user_agent(request: &Request) -> Response {
    let body = request.headers().user_agent().unwrap_or("").to_string();

    Response::builder()
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len().to_string())
        .body(body)
        .build()
}
