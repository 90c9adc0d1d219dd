//! Route modules.

pub mod cats;
pub mod health;
