pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod glutils;
pub mod input;
pub mod math;
pub mod screen;
pub mod shaders;
pub mod sprite;
pub mod system;

pub use canvas::Canvas;
pub use color::Color;
pub use error::BackendError;
pub use geometry::{check_collision, Rect};
pub use input::{Direction, EventSource, InputEvent};
pub use system::System;
