mod stats_service;
mod stats_service_impl;

pub use stats_service::*;
pub use stats_service_impl::*;
