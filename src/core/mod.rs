//! Core business logic layer
//!
//! This module contains the data structures, traits and operations that
//! turn a submitted profile into a salary estimate with advice.

pub mod advice;
pub mod data;
pub mod operations;
pub mod traits;
