pub mod classifier;
pub mod dimension;
pub mod level;

pub use classifier::*;
pub use dimension::*;
pub use level::*;
