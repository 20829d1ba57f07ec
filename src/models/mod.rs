pub mod chain;

pub use chain::{ChainAdvance, Node, NodeChain};
