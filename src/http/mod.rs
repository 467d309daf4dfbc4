//! HTTP protocol implementation.
//!
//! This module implements a small HTTP/1.1 server that answers exactly one
//! request per connection.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection request-response state machine
//! - **`parser`**: Reads the request line, headers and body off a buffered stream
//! - **`request`**: HTTP request representation and header accessors
//! - **`response`**: HTTP response representation with builder pattern
//! - **`encoding`**: `Accept-Encoding` negotiation and body compression
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Request line, headers, optional body
//!        └──────┬──────┘
//!               │ Request received (or 400 for a malformed one)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and build response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tinyhttp::handler::Handler;
//! use tinyhttp::http::connection::{Connection, ConnectionLimits};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:4221").await?;
//!     let handler = Arc::new(Handler::with_root("/tmp/files"));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let handler = handler.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, handler, ConnectionLimits::default());
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod encoding;
pub mod writer;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_ENCODING: &str = "Content-Encoding";
pub const ACCEPT_ENCODING: &str = "Accept-Encoding";
pub const USER_AGENT: &str = "User-Agent";
