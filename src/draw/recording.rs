// src/draw/recording.rs
//
// Test surface that records primitives in surface coordinates

use nannou::prelude::*;

use super::{Paint, Surface};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Affine {
    scale: Vec2,
    offset: Vec2,
}

impl Affine {
    const IDENTITY: Self = Self {
        scale: Vec2::ONE,
        offset: Vec2::ZERO,
    };

    fn apply(&self, p: Point2) -> Point2 {
        self.offset + p * self.scale
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Fill(Rgb<f32>),
    Line {
        from: Point2,
        to: Point2,
        paint: Paint,
    },
    Circle {
        center: Point2,
        radius: f32,
        paint: Paint,
    },
}

pub struct RecordingSurface {
    width: f32,
    height: f32,
    transform: Affine,
    stack: Vec<Affine>,
    pub primitives: Vec<Primitive>,
    pub max_depth: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            transform: Affine::IDENTITY,
            stack: Vec::new(),
            primitives: Vec::new(),
            max_depth: 0,
        }
    }

    pub fn lines(&self) -> Vec<(Point2, Point2)> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Point2, f32)> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill(&mut self, color: Rgb<f32>) {
        self.primitives.push(Primitive::Fill(color));
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
        self.max_depth = self.max_depth.max(self.stack.len());
    }

    fn restore(&mut self) {
        self.transform = self.stack.pop().expect("restore without save");
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.transform.offset = self.transform.apply(vec2(x, y));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transform.scale *= vec2(sx, sy);
    }

    fn line(&mut self, from: Point2, to: Point2, paint: &Paint) {
        self.primitives.push(Primitive::Line {
            from: self.transform.apply(from),
            to: self.transform.apply(to),
            paint: *paint,
        });
    }

    fn circle(&mut self, center: Point2, radius: f32, paint: &Paint) {
        self.primitives.push(Primitive::Circle {
            center: self.transform.apply(center),
            radius,
            paint: *paint,
        });
    }
}
