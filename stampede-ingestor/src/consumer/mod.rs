//! Queue consumer
//!
//! The binding between the queue transport and the ingestion service.

pub mod poller;

pub use poller::QueuePoller;
