//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Default `iss` claim for issued tokens
pub const DEFAULT_JWT_ISSUER: &str = "employee-directory";

/// Default `aud` claim for issued tokens
pub const DEFAULT_JWT_AUDIENCE: &str = "employee-directory-clients";

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Argon2 memory cost in KiB (OWASP minimum for argon2id)
pub const DEFAULT_ARGON2_MEMORY_KIB: u32 = 19 * 1024;

/// Argon2 iteration count
pub const DEFAULT_ARGON2_ITERATIONS: u32 = 2;

/// Argon2 lanes
pub const ARGON2_PARALLELISM: u32 = 1;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Front-end origins allowed by CORS unless overridden
pub const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "http://localhost:3000,https://localhost:3000";

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (SQLite file, created on first run)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://employees.db?mode=rwc";

/// Default connection pool size
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum full name length requirement
pub const MIN_FULL_NAME_LENGTH: usize = 2;

/// Column width for emails and names
pub const MAX_TEXT_LENGTH: u32 = 100;

// =============================================================================
// Error Messages
// =============================================================================

pub const MSG_EMPLOYEE_NOT_FOUND: &str = "Employee not found";
pub const MSG_MANAGER_NOT_FOUND: &str = "Manager not found";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const MSG_EMAIL_ALREADY_EXISTS: &str = "Email already exists";
pub const MSG_UNAUTHORIZED_ACCESS: &str = "Unauthorized access";

pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_INVALID: &str = "Invalid email format";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const MSG_PASSWORD_NEEDS_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const MSG_PASSWORD_NEEDS_DIGIT: &str = "Password must contain at least one number";
pub const MSG_FULL_NAME_REQUIRED: &str = "Full name is required";
pub const MSG_FULL_NAME_TOO_SHORT: &str = "Full name must be at least 2 characters";
pub const MSG_EMAIL_TOO_LONG: &str = "Email must not exceed 100 characters";
pub const MSG_FULL_NAME_TOO_LONG: &str = "Full name must not exceed 100 characters";

pub const MSG_DATABASE_UNAVAILABLE: &str = "Database unavailable";
