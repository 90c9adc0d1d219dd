//! Application services for the cat registry.

pub mod command_handlers;
pub mod query_handlers;
