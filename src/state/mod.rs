//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `weather`, `toast`) so individual
//! components can depend on small focused models.

pub mod session;
pub mod toast;
pub mod weather;
