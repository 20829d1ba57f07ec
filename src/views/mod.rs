// src/views/mod.rs

pub mod animated_view;

pub use animated_view::{attach, update, AnimatedView};
