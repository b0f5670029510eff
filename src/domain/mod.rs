//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! Contains: Entities, Value Objects, field validation rules.

pub mod employee;
pub mod manager;
pub mod password;
pub mod validation;

pub use employee::{Employee, EmployeeChanges, EmployeeResponse, NewEmployee};
pub use manager::Manager;
pub use password::Password;
