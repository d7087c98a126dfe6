//! Domain types and pure logic for the leadlink backend.
//!
//! Everything in this crate is I/O-free: entities, the closed status and
//! contact-method enumerations, input validation, the error taxonomy, and
//! the view-state projection (progress math) computed from a project and
//! its leads.

pub mod error;
pub mod lead;
pub mod project;
pub mod projection;
pub mod types;
pub mod validation;
