use leptos::mount::mount_to_body;
use leptos::prelude::*;
use log::LevelFilter;

use task_board::{logging, App, BoardConfig};

fn main() {
    console_error_panic_hook::set_once();

    // Installed before the config is read so a rejected config gets reported
    logging::init(LevelFilter::Info);
    let config = BoardConfig::load_from_page();
    log::set_max_level(config.log_level);
    log::info!("starting board with {} tasks", config.seed.total());

    mount_to_body(move || view! { <App config=config /> });
}
