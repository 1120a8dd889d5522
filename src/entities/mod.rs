//! Declarative resource definitions

pub mod macros;
