//! Screen-side list engine of the restaurant back office.
//!
//! Screens fetch JSON collections from the backend, turn them into
//! [`shared::records::Record`]s and render the page computed by
//! [`shared::list_state::ListState::view`].

pub mod domain;
pub mod shared;
