//! JSON API consumed by the blog front-end.
//!
//! # Modules
//!
//! - [`dto`] - Response and query types with the front-end's camelCase shape
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration under `/api`

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
