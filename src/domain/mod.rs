//! Domain layer containing blog entities and the note source contract.
//!
//! # Architecture
//!
//! - [`entities`] - Articles, attachments and site metadata
//! - [`note_source`] - Trait for reading published notes, implemented by
//!   [`crate::infrastructure::trilium`]
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; the client half of the crate ([`crate::client`]) reuses
//! [`entities::BlogInfo`] as its wire type.

pub mod entities;
pub mod note_source;
