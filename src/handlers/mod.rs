//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the todo service.
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Todo** (`todo`) - List, create, read, update and delete of the singleton todo

mod health_check;
mod todo;

pub use health_check::*;
pub use todo::*;
