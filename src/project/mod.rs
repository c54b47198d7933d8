//! Project and task management.
//!
//! Users create projects with a colour, an icon, a methodology and a
//! deadline window, then manage prioritised tasks with ordered subtasks
//! inside each project. Every change goes through a draft that is validated
//! on commit, so a rejected edit never reaches storage. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Screen-facing services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
