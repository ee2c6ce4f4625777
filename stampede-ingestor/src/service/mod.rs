//! Ingestor services
//!
//! Business logic for turning completion messages into stored records.

pub mod ingest;
