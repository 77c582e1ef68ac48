//! # eduhub-auth
//!
//! Authentication primitives for EduHub.
//!
//! ## Modules
//!
//! - `jwt`: signed access token issuance and validation
//! - `password`: Argon2id password hashing and policy enforcement
//! - `rbac`: ownership and admin checks for content operations

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::RbacEnforcer;
