//! Adapter implementations for the project and task repository ports.

pub mod memory;
pub mod postgres;
