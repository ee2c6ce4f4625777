//! Stampede Core
//!
//! Core types and abstractions for the Stampede load-test dispatch system.
//!
//! This crate contains:
//! - Domain types: Core business entities (LaunchSpec, LaunchOutcome, ResultRecord)
//! - DTOs: Wire-format types for the launcher API and the completion queue

pub mod domain;
pub mod dto;
