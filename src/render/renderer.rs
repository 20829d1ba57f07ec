// src/render/renderer.rs
// the renderer paints the chain and advances it on the driver's schedule

use std::time::Instant;

use crate::animation::AnimationDriver;
use crate::config::VisualConfig;
use crate::draw::{LineCap, Paint, Surface};
use crate::models::{ChainAdvance, NodeChain};

pub struct Renderer {
    chain: NodeChain,
    driver: AnimationDriver,
    paint: Paint,
    config: VisualConfig,
}

impl Renderer {
    pub fn new(config: VisualConfig) -> Self {
        Self {
            chain: NodeChain::new(config.clone()),
            driver: AnimationDriver::new(config.tick_delay),
            paint: Paint {
                color: config.fore_color,
                stroke_weight: 1.0,
                cap: LineCap::Round,
            },
            config,
        }
    }

    /// Paints the current state, then advances the chain if a tick is due.
    /// The driver stops once the animating node settles.
    pub fn render<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        now: Instant,
    ) -> Option<ChainAdvance> {
        surface.fill(self.config.back_color);

        self.paint.stroke_weight =
            surface.width().min(surface.height()) / self.config.stroke_factor;
        self.chain.draw_all(surface, &self.paint);

        let chain = &mut self.chain;
        let advance = self.driver.tick(now, || chain.advance())?;
        if advance.settled() {
            self.driver.stop();
        }
        Some(advance)
    }

    /// Starts the current node and wakes the driver. Taps during an animation are ignored.
    pub fn handle_tap(&mut self, now: Instant) -> bool {
        if !self.chain.start_current() {
            log::warn!("tap ignored, node {} still animating", self.chain.current());
            return false;
        }
        log::debug!("tap started node {}", self.chain.current());
        self.driver.start(now);
        true
    }

    pub fn needs_redraw(&self, now: Instant) -> bool {
        self.driver.is_due(now)
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_active()
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::recording::{Primitive, RecordingSurface};

    fn renderer() -> Renderer {
        Renderer::new(VisualConfig::default())
    }

    // Renders at the driver's pace until it goes idle, returning the settle result
    fn run_until_idle(renderer: &mut Renderer, mut now: Instant) -> (ChainAdvance, Instant) {
        let delay = renderer.driver().delay();
        let mut last = None;
        for _ in 0..200 {
            let mut surface = RecordingSurface::new(300.0, 600.0);
            if let Some(advance) = renderer.render(&mut surface, now) {
                last = Some(advance);
            }
            if !renderer.is_animating() {
                return (last.expect("no advance happened"), now);
            }
            now += delay;
        }
        panic!("driver never stopped");
    }

    #[test]
    fn test_render_paints_background_first() {
        let mut renderer = renderer();
        let mut surface = RecordingSurface::new(300.0, 600.0);
        renderer.render(&mut surface, Instant::now());

        let config = VisualConfig::default();
        assert_eq!(surface.primitives[0], Primitive::Fill(config.back_color));
        assert_eq!(surface.lines().len(), 10);
        match &surface.primitives[1] {
            Primitive::Line { paint, .. } => {
                assert_eq!(paint.color, config.fore_color);
                assert_eq!(paint.cap, LineCap::Round);
                assert!((paint.stroke_weight - 300.0 / 90.0).abs() < 1e-4);
            }
            other => panic!("expected a line, got {:?}", other),
        }
    }

    #[test]
    fn test_render_without_tap_does_not_advance() {
        let mut renderer = renderer();
        let mut surface = RecordingSurface::new(300.0, 600.0);
        assert_eq!(renderer.render(&mut surface, Instant::now()), None);
        assert!(renderer.chain().node(0).unwrap().state.is_idle());
    }

    #[test]
    fn test_tap_animates_one_node_then_stops() {
        let mut renderer = renderer();
        let start = Instant::now();

        assert!(renderer.handle_tap(start));
        assert!(renderer.is_animating());
        assert!(renderer.needs_redraw(start));

        let (advance, end) = run_until_idle(&mut renderer, start);
        assert_eq!(advance, ChainAdvance::SettledAndMoved { from: 0, to: 1 });
        assert_eq!(renderer.chain().current(), 1);
        assert_eq!(renderer.chain().node(0).unwrap().state.settled_progress(), 1.0);

        // about 1 / step ticks, 20ms apart
        let elapsed = end - start;
        assert!(elapsed >= renderer.driver().delay() * 45);

        // the lapsed deadline does not restart anything
        let mut surface = RecordingSurface::new(300.0, 600.0);
        assert_eq!(renderer.render(&mut surface, end + renderer.driver().delay()), None);
        assert!(!renderer.needs_redraw(end + renderer.driver().delay() * 2));
    }

    #[test]
    fn test_ticks_respect_delay() {
        let mut renderer = renderer();
        let start = Instant::now();
        renderer.handle_tap(start);

        let mut surface = RecordingSurface::new(300.0, 600.0);
        assert_eq!(renderer.render(&mut surface, start), Some(ChainAdvance::Continued));
        // redraws between ticks only paint
        assert_eq!(renderer.render(&mut surface, start), None);
        let progress = renderer.chain().node(0).unwrap().state.progress();
        assert!((progress - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_tap_while_animating_is_ignored() {
        let mut renderer = renderer();
        let start = Instant::now();
        renderer.handle_tap(start);
        let mut surface = RecordingSurface::new(300.0, 600.0);
        renderer.render(&mut surface, start);

        let before = renderer.chain().node(0).unwrap().state.clone();
        let pending = renderer.driver().pending();
        assert!(!renderer.handle_tap(start));
        assert_eq!(renderer.chain().node(0).unwrap().state, before);
        assert_eq!(renderer.driver().pending(), pending);
    }

    #[test]
    fn test_taps_sweep_down_the_chain() {
        let mut renderer = renderer();
        let mut now = Instant::now();
        let mut settled = Vec::new();

        for _ in 0..6 {
            assert!(renderer.handle_tap(now));
            let (advance, end) = run_until_idle(&mut renderer, now);
            settled.push(advance.settled_node().unwrap());
            now = end + renderer.driver().delay();
        }

        assert_eq!(settled, vec![0, 1, 2, 3, 4, 4]);
        assert_eq!(renderer.chain().direction(), -1);
    }
}
