// src/draw/mod.rs
// The drawing surface abstraction and the node glyph drawing

pub mod nannou_surface;
pub mod node_draw;
#[cfg(test)]
pub mod recording;

pub use nannou_surface::NannouSurface;
pub use node_draw::{draw_node, NodeLayout};

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

/// Reusable stroke/fill style handed to every primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
    pub cap: LineCap,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: rgb(0.0, 0.0, 0.0),
            stroke_weight: 1.0,
            cap: LineCap::Butt,
        }
    }
}

/// A drawable area with a top-left origin and y growing downward.
/// `save`/`restore` bracket `translate`/`scale` changes.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn fill(&mut self, color: Rgb<f32>);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn scale(&mut self, sx: f32, sy: f32);

    fn line(&mut self, from: Point2, to: Point2, paint: &Paint);
    fn circle(&mut self, center: Point2, radius: f32, paint: &Paint);
}
