//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Request path
//!     → router.rs (prefix lookup)
//!     → Return: Route + the path remainder after the prefix
//! ```
//!
//! The table is built once at startup and never mutated. Prefixes are
//! checked in table order and the first match wins.

pub mod router;

pub use router::{Route, RouteMatch, RouteTable};
