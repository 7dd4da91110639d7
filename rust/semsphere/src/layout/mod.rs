pub mod collision;
pub mod color;
pub mod strategy;

pub use collision::*;
pub use color::*;
pub use strategy::*;
