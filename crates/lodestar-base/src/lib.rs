//! # lodestar-base
//!
//! Core types and utilities for the Lodestar SAT solver.
//!
//! This crate provides the foundational building blocks used across all other
//! Lodestar crates, including:
//!
//! - **Literals**: packed literal/variable representation
//! - **Tri-valued truth**: the `Tribool` assignment value
//! - **Error Types**: unified error handling across the solver
//! - **Utilities**: deterministic instance generation helpers

pub mod error;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use types::{Lit, Tribool, Var};
