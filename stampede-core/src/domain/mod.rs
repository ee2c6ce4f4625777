//! Core domain types
//!
//! This module contains the core domain structures used across Stampede services.
//! These types represent the fundamental business entities and are shared between
//! the launcher (dispatch) and the ingestor (persistence).

pub mod launch;
pub mod result;
