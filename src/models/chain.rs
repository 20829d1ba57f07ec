// src/models/chain.rs
//
// The linked chain of animated nodes
// only the node under the cursor is ever allowed to animate

use crate::animation::AnimationState;
use crate::config::VisualConfig;
use crate::draw::{draw_node, NodeLayout, Paint, Surface};

#[derive(Debug, Clone)]
pub struct Node {
    pub index: usize,
    pub state: AnimationState,
    pub next: Option<usize>,
    pub prev: Option<usize>,
}

/// What a single `advance` did to the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainAdvance {
    /// The current node was not animating.
    Idle,
    /// The current node stepped but has not settled.
    Continued,
    /// The current node settled and the cursor moved to its neighbor.
    SettledAndMoved { from: usize, to: usize },
    /// The current node settled at an end of the chain; the direction flipped
    /// and the cursor stayed put.
    SettledAtBoundaryFlipped { at: usize },
}

impl ChainAdvance {
    pub fn settled(&self) -> bool {
        matches!(
            self,
            ChainAdvance::SettledAndMoved { .. } | ChainAdvance::SettledAtBoundaryFlipped { .. }
        )
    }

    /// Index of the node that settled, if any.
    pub fn settled_node(&self) -> Option<usize> {
        match *self {
            ChainAdvance::SettledAndMoved { from, .. } => Some(from),
            ChainAdvance::SettledAtBoundaryFlipped { at } => Some(at),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NodeChain {
    nodes: Vec<Node>,
    current: usize,
    direction: i32,
    config: VisualConfig,
}

impl NodeChain {
    pub fn new(config: VisualConfig) -> Self {
        let count = config.node_count.max(1);
        if count != config.node_count {
            log::warn!("node count of 0 raised to 1");
        }

        let nodes = (0..count)
            .map(|index| Node {
                index,
                state: AnimationState::new(config.step_size),
                next: (index + 1 < count).then_some(index + 1),
                prev: index.checked_sub(1),
            })
            .collect();

        Self {
            nodes,
            current: 0,
            direction: 1,
            config,
        }
    }

    /// Draws every node, following the `next` links from the head.
    pub fn draw_all<S: Surface + ?Sized>(&self, surface: &mut S, paint: &Paint) {
        let Some(layout) = NodeLayout::for_surface(surface.width(), surface.height(), &self.config)
        else {
            log::warn!(
                "skipping draw on degenerate surface {}x{}",
                surface.width(),
                surface.height()
            );
            return;
        };

        let mut cursor = Some(0);
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            draw_node(
                surface,
                &layout,
                self.config.parts,
                node.index,
                node.state.progress(),
                paint,
            );
            cursor = node.next;
        }
    }

    /// Steps the current node once and hands the cursor on when it settles.
    pub fn advance(&mut self) -> ChainAdvance {
        let current = self.current;
        let state = &mut self.nodes[current].state;
        if state.is_idle() {
            return ChainAdvance::Idle;
        }

        let Some(settled) = state.update() else {
            return ChainAdvance::Continued;
        };

        match self.neighbor(current, self.direction) {
            Some(to) => {
                log::debug!("node {} settled at {}, moving to {}", current, settled, to);
                self.current = to;
                ChainAdvance::SettledAndMoved { from: current, to }
            }
            None => {
                self.direction *= -1;
                log::debug!(
                    "node {} settled at {}, end of chain, direction now {}",
                    current,
                    settled,
                    self.direction
                );
                ChainAdvance::SettledAtBoundaryFlipped { at: current }
            }
        }
    }

    /// Starts the current node. False when it is already animating.
    pub fn start_current(&mut self) -> bool {
        self.nodes[self.current].state.start_updating()
    }

    pub fn neighbor(&self, index: usize, direction: i32) -> Option<usize> {
        let node = self.nodes.get(index)?;
        match direction.signum() {
            1 => node.next,
            -1 => node.prev,
            _ => None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn config(&self) -> &VisualConfig {
        &self.config
    }
}
