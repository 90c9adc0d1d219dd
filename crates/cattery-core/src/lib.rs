//! Cattery Core: shared domain abstractions.
//!
//! This crate defines the identifier, error, and clock types that the cat
//! context and the HTTP layer depend on. It contains no infrastructure code.

pub mod clock;
pub mod error;
pub mod id;
