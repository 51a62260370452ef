// Formatting and parsing utilities

pub mod date;
pub mod duration;
pub mod escape;

pub use date::*;
pub use duration::*;
pub use escape::*;
