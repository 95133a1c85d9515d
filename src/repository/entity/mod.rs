mod notification_find_entity;
mod notification_insert_entity;
mod preferences_entity;
mod stats_entity;
mod user_find_entity;

pub use notification_find_entity::*;
pub use notification_insert_entity::*;
pub use preferences_entity::*;
pub use stats_entity::*;
pub use user_find_entity::*;
