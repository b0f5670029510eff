//! Employee Directory - Manager-scoped employee records
//!
//! Managers register and log in to obtain a bearer token, then create,
//! read, search, update and delete the employees they own. Nobody can see
//! or touch another manager's employees.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and field rules
//! - **services**: Credentials, manager identity, employee directory
//! - **infra**: Database, migrations, repositories, Unit of Work
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (applies pending migrations first)
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Employee, EmployeeResponse, Manager, Password};
pub use errors::{AppError, AppResult};
