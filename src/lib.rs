//! `DailyTask`: project and task management core.
//!
//! This crate holds the domain logic of a personal planner: projects with a
//! colour, an icon, a methodology and a deadline window, each owning a list
//! of prioritised tasks with ordered subtasks.
//!
//! # Architecture
//!
//! `DailyTask` follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and navigation
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`project`]: Projects, tasks, and their draft-commit workflows
//! - [`config`]: TOML configuration
//! - [`logging`]: Tracing subscriber setup

pub mod config;
pub mod logging;
pub mod project;
