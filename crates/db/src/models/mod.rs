//! Row types for the PostgreSQL backend and their conversions into the
//! domain entities from `leadlink-core`.

pub mod lead;
pub mod project;
