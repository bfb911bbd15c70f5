//! # weather-client
//!
//! Leptos + WASM single-page client: email/password sign-in against a demo
//! REST auth service and a dashboard that polls current weather conditions
//! for one configured location.
//!
//! This crate contains pages, components, application state, the HTTP seam
//! used by both remote services, and the browser storage glue. Everything
//! that touches the browser is gated behind the `csr` feature so the rest
//! builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
