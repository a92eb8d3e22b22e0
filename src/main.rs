mod components;
mod config;
mod hooks;
mod models;
mod services;

use components::App;
use config::CONFIG;

fn main() {
    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
    }
    console_error_panic_hook::set_once();

    log::info!("🚀 Branch Locator starting ({})...", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
