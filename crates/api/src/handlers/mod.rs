pub mod lead;
pub mod project;
pub mod resolve;
