// src/lib.rs

pub mod animation;
pub mod config;
pub mod draw;
pub mod error;
pub mod models;
pub mod render;
pub mod utilities;
pub mod views;

pub use error::{Error, Result};
pub use views::{attach, AnimatedView};
