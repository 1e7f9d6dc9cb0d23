//! Core business logic
//!
//! Path derivation, operation descriptors, the create/update/login flow,
//! and the system dependency checks. Process execution lives in
//! [`crate::infra`].

pub mod context;
pub mod doctor;
pub mod env;
pub mod ops;
pub mod paths;
