//! Product Handlers

pub(crate) mod by_ids;
pub(crate) mod index;
pub(crate) mod latest;
pub(crate) mod quantity;
