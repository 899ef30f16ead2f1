//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod binomial;
pub mod bound;
pub mod cartan;
pub mod coxeter;
pub mod descent;
pub mod properness;
pub mod word;
