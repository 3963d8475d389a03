mod pack;
mod stats;

pub use pack::*;
pub use stats::*;
