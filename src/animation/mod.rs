pub mod animator;
pub mod camera;
pub mod cell;
pub mod easing;
pub mod explosion;
pub mod grid;
pub mod lights;
pub mod pointer;
pub mod tween;
pub mod typewriter;
pub mod wave;

pub use animator::{AnimatorState, FrameScene};
pub use cell::CellInstance;
