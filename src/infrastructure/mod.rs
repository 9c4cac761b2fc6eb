//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for note access and caching.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`trilium`] - Trilium ETAPI client implementing [`crate::domain::note_source::NoteSource`]

pub mod cache;
pub mod trilium;
