//! # Utilities Module
//!
//! Utility functions for randomized arithmetic and grid pathfinding.

pub mod math;
pub mod pathfinding;

pub use math::*;
pub use pathfinding::*;
