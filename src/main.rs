//! CSR entry point: build the configuration and mount the app.

use leptos::prelude::*;
use sentinel_dash::config::AppConfig;
use sentinel_dash::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(|| view! { <App config=AppConfig::default() /> });
}
