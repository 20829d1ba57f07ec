// src/render/mod.rs
// Composes chain drawing with driver ticking

pub mod renderer;

pub use renderer::Renderer;
