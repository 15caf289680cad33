//! Shared application domain, persistence, and integration modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod janitor;
pub mod mail;
pub mod payments;
pub mod secrets;

#[cfg(test)]
mod test;
