//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! Repository access goes through the Unit of Work; hashing and tokens
//! go through the credential service.

mod auth_service;
pub mod container;
mod credential_service;
mod employee_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use credential_service::{Claims, CredentialService, Credentials, TokenResponse};
pub use employee_service::{EmployeeDirectory, EmployeeService};
