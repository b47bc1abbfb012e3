//! calculator — small arithmetic calculator (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod arithmetic;
pub mod config;
pub mod constants;
pub mod demo;
pub mod env;
pub mod models;
pub mod output;

pub use arithmetic::{ArithmeticError, add, divide, multiply, percentage, subtract};
