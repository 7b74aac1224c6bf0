//! Astrelis Core
//!
//! Shared primitives for the Astrelis designer crates: geometry value types,
//! `glam`-backed math, hash collections and logging setup.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
