//! Contact Handlers

pub(crate) mod submit;
