//! DTOs (Data Transfer Objects)
//!
//! Wire-format types: the launcher's HTTP request/response shapes and the
//! completion message workers drop on the queue. Field names follow the
//! external camelCase contract.

pub mod launch;
pub mod message;
