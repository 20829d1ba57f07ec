// src/draw/node_draw.rs
//
// Draws one node of the chain: a mirrored line-and-dot glyph

use nannou::prelude::*;

use super::{Paint, Surface};
use crate::config::VisualConfig;
use crate::utilities::{divide_scale, sinify};

/// Sizes derived from the surface dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeLayout {
    pub center_x: f32,
    pub gap: f32,
    pub size: f32,
    pub radius: f32,
    pub stroke_weight: f32,
}

impl NodeLayout {
    /// None for a degenerate surface, in which case nothing should be drawn.
    pub fn for_surface(width: f32, height: f32, config: &VisualConfig) -> Option<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width)
            || !valid(height)
            || !valid(config.size_factor)
            || !valid(config.radius_factor)
            || !valid(config.stroke_factor)
        {
            return None;
        }

        let gap = height / (config.node_count + 1) as f32;
        let size = gap / config.size_factor;
        Some(Self {
            center_x: width / 2.0,
            gap,
            size,
            radius: size / config.radius_factor,
            stroke_weight: width.min(height) / config.stroke_factor,
        })
    }

    pub fn node_y(&self, index: usize) -> f32 {
        self.gap * (index + 1) as f32
    }
}

pub fn draw_node<S: Surface + ?Sized>(
    surface: &mut S,
    layout: &NodeLayout,
    parts: usize,
    index: usize,
    progress: f32,
    paint: &Paint,
) {
    let line_length = layout.size * sinify(progress);
    let dot_x = layout.size * divide_scale(progress, 1, 2);

    surface.save();
    surface.translate(layout.center_x, layout.node_y(index));
    for j in 0..parts {
        surface.save();
        // odd parts are mirrored horizontally
        surface.scale(1.0 - 2.0 * (j % 2) as f32, 1.0);
        surface.line(pt2(0.0, 0.0), pt2(line_length, 0.0), paint);
        surface.circle(pt2(dot_x, 0.0), layout.radius, paint);
        surface.restore();
    }
    surface.restore();
}
