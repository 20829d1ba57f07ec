// src/draw/nannou_surface.rs
//
// Surface implementation on top of a nannou Draw
// nannou is centred and y-up, the surface is top-left and y-down

use nannou::prelude::*;

use super::{LineCap, Paint, Surface};

pub struct NannouSurface {
    width: f32,
    height: f32,
    current: Draw,
    stack: Vec<Draw>,
}

impl NannouSurface {
    pub fn new(draw: &Draw, width: f32, height: f32) -> Self {
        let current = draw.x_y(-width / 2.0, height / 2.0).scale_y(-1.0);
        Self {
            width,
            height,
            current,
            stack: Vec::new(),
        }
    }
}

impl Surface for NannouSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill(&mut self, color: Rgb<f32>) {
        self.current.background().color(color);
    }

    fn save(&mut self) {
        self.stack.push(self.current.clone());
    }

    fn restore(&mut self) {
        if let Some(draw) = self.stack.pop() {
            self.current = draw;
        } else {
            log::warn!("restore without matching save");
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.current = self.current.x_y(x, y);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.current = self.current.scale_x(sx).scale_y(sy);
    }

    fn line(&mut self, from: Point2, to: Point2, paint: &Paint) {
        let line = self
            .current
            .line()
            .start(from)
            .end(to)
            .stroke_weight(paint.stroke_weight)
            .color(paint.color);
        match paint.cap {
            LineCap::Round => {
                line.caps_round();
            }
            LineCap::Butt => {
                line.caps_butt();
            }
        }
    }

    fn circle(&mut self, center: Point2, radius: f32, paint: &Paint) {
        self.current
            .ellipse()
            .xy(center)
            .radius(radius)
            .color(paint.color);
    }
}
