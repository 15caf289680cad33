//! Checkout Handlers

pub(crate) mod create_session;
pub(crate) mod verify_quantities;
