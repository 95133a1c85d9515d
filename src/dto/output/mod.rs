mod broadcast;
mod notification;
mod page;
mod preferences;
mod stats;

pub use broadcast::*;
pub use notification::*;
pub use page::*;
pub use preferences::*;
pub use stats::*;
