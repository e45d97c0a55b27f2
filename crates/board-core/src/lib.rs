//! # Board Core
//!
//! The domain layer of the board: posts, comments and the store port.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod seed;

pub use error::DomainError;
