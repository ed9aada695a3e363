//! Command implementations

pub mod mask;
pub mod validate;
