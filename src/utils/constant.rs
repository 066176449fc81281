//! # Application Constants
//!
//! This module defines the fixed values of the todo service: the route prefix,
//! the singleton identity and the fields of the seed todo.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// Prefix under which every API route is mounted
pub const API_PREFIX: &str = "/api/v1";

/// The only id a stored todo can have
pub const SINGLETON_TODO_ID: u64 = 1;

/// Title of the seed todo, also the fallback when a create omits `title`
pub const DEFAULT_TITLE: &str = "Watch CSSE6400 Lecture";

/// Description of the seed todo, also the fallback when a create omits `description`
pub const DEFAULT_DESCRIPTION: &str = "Watch the CSSE6400 lecture on ECHO360 for week 1";

/// Completion flag of the seed todo
pub const DEFAULT_COMPLETED: bool = true;

/// Deadline of the seed todo
pub const DEFAULT_DEADLINE_AT: &str = "2026-02-27T18:00:00";

/// Fallback listen address when `BIND_ADDR` is unset
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8090));

/// Fallback tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "todo_service=info,tower_http=info";
