//! Networking modules for the two remote REST services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport seam shared by both services, `auth` and
//! `weather` wrap one service each, `types` defines the wire schema, and
//! `error` the user-facing failure taxonomy.

pub mod auth;
pub mod error;
pub mod http;
pub mod types;
pub mod weather;

#[cfg(test)]
pub(crate) mod fake;
