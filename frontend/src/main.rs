use crate::app::App;
use crate::config::app_config;

mod api;
mod app;
mod components;
mod config;
mod logging;

fn main() {
    logging::init(app_config().log_level());
    yew::Renderer::<App>::new().render();
}
