//! Adapters implementing the cat registry ports.

pub mod in_memory_repository;
