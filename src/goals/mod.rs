//! Goal evaluation: progress percentages and daily completion counts.

pub mod completion;
pub mod defaults;
pub mod progress;

pub use completion::*;
pub use defaults::*;
pub use progress::*;
