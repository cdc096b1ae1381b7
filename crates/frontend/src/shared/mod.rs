pub mod columns;
pub mod config;
pub mod error;
pub mod format;
pub mod list_state;
pub mod list_utils;
pub mod records;
