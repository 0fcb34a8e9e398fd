//! Prelude module for the gnsscal crate.
//!
//! Re-exports the derive macros shared by the calendar types.

pub use derive_more::Display;
pub use serde::{Deserialize, Serialize};
