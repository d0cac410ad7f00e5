//! Integration tests for the processor module
//!
//! Tests complete runs over temporary bulletin directories.

pub mod error_handling;
