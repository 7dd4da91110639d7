pub mod guides;
pub mod pather;
pub mod plotter;
pub mod session;
pub mod tokenize;

pub use guides::*;
pub use pather::*;
pub use plotter::*;
pub use session::*;
pub use tokenize::*;

#[cfg(test)]
mod tests;
