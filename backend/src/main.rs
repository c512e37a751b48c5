#[macro_use]
extern crate rocket;

use log::info;

mod api;
mod config;
mod models;
mod services;
mod utils;

use services::captions::{CaptionSource, YouTubeCaptionSource};

pub struct AppState {
    pub captions: Box<dyn CaptionSource>,
}

fn build_rocket(state: AppState) -> rocket::Rocket<rocket::Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![api::index])
        .mount("/api", routes![api::get_transcript, api::post_transcript])
        .attach(config::create_cors().expect("Failed to create CORS fairing"))
}

#[launch]
fn rocket() -> _ {
    config::load_environment();
    config::init_logger();

    let captions = YouTubeCaptionSource::new().expect("Failed to create caption client");
    info!("Caption client ready.");

    build_rocket(AppState {
        captions: Box::new(captions),
    })
}
