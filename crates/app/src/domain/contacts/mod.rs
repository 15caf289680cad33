//! Contact form submissions

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::ContactsServiceError;
pub use service::*;
