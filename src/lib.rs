//! minihttpd - a small HTTP/1.1 server built directly on TCP
//!
//! This crate implements a fixed-route HTTP/1.1 server by hand on raw byte
//! streams: no HTTP framework underneath, just buffered parsing, a route
//! table, and a thread per connection. Routes: `GET /`, `GET /echo/{msg}`,
//! `GET /user-agent`, and `GET`/`POST` under `/files/` against a directory
//! given at startup.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
