mod dto;
mod like_message;
mod notifications_service;
mod notifications_service_impl;

pub use dto::NotificationsServiceConfig;
pub use notifications_service::*;
pub use notifications_service_impl::*;
