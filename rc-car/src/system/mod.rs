//! Core system components for car operation
pub mod diag;
pub mod motor;
pub mod resources;
