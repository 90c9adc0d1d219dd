//! Cattery: cat registry bounded context.
//!
//! Responsible for the `Cat` entity and its age arithmetic, the repository
//! port through which cats are stored, the in-memory adapter behind that
//! port, and the command/query handlers the HTTP layer calls.

pub mod application;
pub mod domain;
pub mod infrastructure;
