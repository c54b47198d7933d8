//! Step definitions for project draft-commit scenarios.

pub mod world;

mod given;
mod then;
