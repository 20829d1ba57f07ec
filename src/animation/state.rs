// src/animation/state.rs
//
// Bistable 0 <-> 1 progress tracker owned by each node

/// Per-node progress. `direction == 0.0` means idle.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    progress: f32,
    settled_progress: f32,
    direction: f32,
    step_size: f32,
}

impl AnimationState {
    pub fn new(step_size: f32) -> Self {
        Self {
            progress: 0.0,
            settled_progress: 0.0,
            direction: 0.0,
            step_size,
        }
    }

    /// Advances one step. Returns the settled value when a full unit has been crossed,
    /// at which point the state is idle again. Does nothing while idle.
    pub fn update(&mut self) -> Option<f32> {
        if self.is_idle() {
            return None;
        }

        self.progress += self.step_size * self.direction;
        if (self.progress - self.settled_progress).abs() > 1.0 {
            self.progress = self.settled_progress + self.direction;
            self.direction = 0.0;
            self.settled_progress = self.progress;
            return Some(self.settled_progress);
        }
        None
    }

    /// Begins a transition toward the opposite settled value.
    /// Returns false, changing nothing, if a transition is already running.
    pub fn start_updating(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.direction = 1.0 - 2.0 * self.settled_progress;
        true
    }

    pub fn is_idle(&self) -> bool {
        self.direction == 0.0
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn settled_progress(&self) -> f32 {
        self.settled_progress
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }
}
