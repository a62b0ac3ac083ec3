//! Core domain types shared across entity families.

pub mod error;

pub use error::DomainError;
