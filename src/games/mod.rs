//! Game implementations.

pub mod combat;
