mod broadcast_service;
mod broadcast_service_impl;

pub use broadcast_service::*;
pub use broadcast_service_impl::*;
