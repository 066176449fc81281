//! # Business Logic Services
//!
//! Services encapsulate the domain behavior used by the HTTP handlers.
//!
//! ## Available Services
//!
//! - **Clock** (`clock`) - Injectable source of the current time
//! - **Store** (`store`) - Singleton todo slot with seed-on-demand semantics

pub mod clock;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use store::TodoStore;
