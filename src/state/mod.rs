pub mod gesture;
pub mod touch;

pub use gesture::{CommitDecision, GestureState, MoveSolution};
pub use touch::TouchTracker;
