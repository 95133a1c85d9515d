mod preferences_service;
mod preferences_service_impl;

pub use preferences_service::*;
pub use preferences_service_impl::*;
