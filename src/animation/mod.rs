pub mod driver;
pub mod state;

pub use driver::AnimationDriver;
pub use state::AnimationState;
