mod notification;
mod preferences;
mod stats;

pub use notification::*;
pub use preferences::*;
pub use stats::*;
