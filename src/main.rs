// src/main.rs
use nannou::prelude::*;

use bouncydots::{config::Config, views, AnimatedView};

fn main() {
    env_logger::init();
    nannou::app(model).update(views::update).run();
}

fn model(app: &App) -> AnimatedView {
    let config = Config::load().unwrap_or_else(|e| {
        log::error!("failed to load config, using defaults: {}", e);
        Config::default()
    });

    views::attach(app, &config).expect("Failed to create window")
}
