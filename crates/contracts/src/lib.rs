//! Data contracts shared between the back-office screens and the REST backend

pub mod domain;
pub mod shared;
