//! # lodestar-format
//!
//! File format support for the Lodestar SAT solver.
//!
//! Currently this is the DIMACS CNF format, the standard interchange format
//! of SAT competitions and benchmark suites.

pub mod dimacs;

pub use dimacs::DimacsCnf;
