//! Domain model for the cat registry.

pub mod commands;
pub mod entities;
pub mod repository;
pub mod validation;
