//!
//! Module with all dtos that are passed between server and users
//!

pub mod input;
pub mod output;

mod notification_type;

pub use notification_type::*;
