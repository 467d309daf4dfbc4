//! tinyhttp - minimal HTTP/1.1 server
//!
//! Hand-rolled request parsing and response formatting over raw TCP,
//! serving echo, user-agent and file endpoints.

pub mod config;
pub mod handler;
pub mod http;
pub mod routing;
pub mod server;
pub mod storage;
