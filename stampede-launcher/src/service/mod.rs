//! Launcher services
//!
//! Business logic for turning launch requests into running worker tasks.

pub mod launch;
