//! Data Transfer Objects for API requests and responses.
//!
//! Response DTOs serialize with camelCase keys, the shape the front-end reads.

pub mod articles;
pub mod health;
pub mod pagination;
