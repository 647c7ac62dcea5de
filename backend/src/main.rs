mod assets;
mod config;

use std::thread;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};

use crate::assets::{serve_embedded, Bundle};
use crate::config::HostConfig;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = HostConfig::from_env();
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("could not open a browser at {}: {}", url, err);
            }
        });
    }

    info!("Case portal available at {}", url);

    let bundle: Bundle = &STATIC_DIR;
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(bundle))
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
