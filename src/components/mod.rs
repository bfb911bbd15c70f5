//! Reusable UI components shared by the pages.

pub mod protected_route;
pub mod toast_host;
pub mod weather_panel;
