//! Browser entry point: install logging, load `/config.json`, mount the app.

#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use weather_client::{
    app::{App, ConfigErrorPage},
    config::AppConfig,
};

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);

        leptos::task::spawn_local(async {
            match AppConfig::fetch().await {
                Ok(config) => {
                    log::info!("configuration loaded, mounting app");
                    leptos::mount::mount_to_body(move || view! { <App config=config/> });
                }
                Err(e) => {
                    log::error!("configuration unavailable: {e}");
                    let message = e.to_string();
                    leptos::mount::mount_to_body(move || view! { <ConfigErrorPage message=message/> });
                }
            }
        });
    }
}
