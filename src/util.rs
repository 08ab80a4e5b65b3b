//! Internal utilities, not part of the API

pub(crate) mod complex;
