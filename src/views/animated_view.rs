// src/views/animated_view.rs
//
// The window content: owns the renderer and wires it to nannou's
// frame loop and pointer events

use nannou::event::{TouchEvent, TouchPhase};
use nannou::prelude::*;
use std::time::Instant;

use crate::config::{Config, VisualConfig};
use crate::draw::NannouSurface;
use crate::error::{Error, Result};
use crate::render::Renderer;

pub struct AnimatedView {
    pub window: WindowId,
    renderer: Renderer,
    draw: Draw,
}

impl AnimatedView {
    pub fn new(window: WindowId, visual: VisualConfig) -> Self {
        Self {
            window,
            renderer: Renderer::new(visual),
            draw: Draw::new(),
        }
    }

    pub fn handle_tap(&mut self) {
        self.renderer.handle_tap(Instant::now());
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

/// Creates the window and installs a fresh `AnimatedView` as its content.
pub fn attach(app: &App, config: &Config) -> Result<AnimatedView> {
    let mut builder = app
        .new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch);
    if config.window.fullscreen {
        builder = builder.fullscreen();
    }

    let window = builder
        .build()
        .map_err(|e| Error::Window(format!("{:?}", e)))?;
    log::info!(
        "attached view to window {:?} ({}x{})",
        window,
        config.window.width,
        config.window.height
    );

    Ok(AnimatedView::new(window, VisualConfig::default()))
}

/// Per-frame host callback. Redraws every frame; the renderer only advances
/// when its driver's deadline has passed.
pub fn update(app: &App, model: &mut AnimatedView, _update: Update) {
    let rect = app
        .window(model.window)
        .map(|window| window.rect())
        .unwrap_or_else(|| app.window_rect());

    model.draw.reset();
    let mut surface = NannouSurface::new(&model.draw, rect.w(), rect.h());
    if let Some(advance) = model.renderer.render(&mut surface, Instant::now()) {
        log::trace!("tick: {:?}", advance);
    }
}

fn view(app: &App, model: &AnimatedView, frame: Frame) {
    if let Err(e) = model.draw.to_frame(app, &frame) {
        log::error!("failed to render frame: {:?}", e);
    }
}

fn mouse_pressed(_app: &App, model: &mut AnimatedView, _button: MouseButton) {
    model.handle_tap();
}

fn touch(_app: &App, model: &mut AnimatedView, touch: TouchEvent) {
    if touch.phase == TouchPhase::Started {
        model.handle_tap();
    }
}
