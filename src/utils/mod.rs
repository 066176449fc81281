//! # Utility Modules
//!
//! This module contains constants, environment-backed configuration and the
//! value coercion helpers used throughout the todo service.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Route prefix and seed todo values
//! - **Coercion** (`coerce`) - Lenient conversion of JSON values to field types
//! - **Static objects** (`static_object`) - Lazily read environment configuration

pub mod coerce;
pub mod constant;
pub mod static_object;
