mod broadcast;
mod like_notification;
mod notification;
mod notification_filters;
mod pagination;
mod preferences_update;

pub use broadcast::*;
pub use like_notification::*;
pub use notification::*;
pub use notification_filters::*;
pub use pagination::*;
pub use preferences_update::*;
