//! Core definitions (errors and argument verification), relied upon by all
//! carousel-* crates.

pub mod error;
pub mod result;

pub use result::Result;
