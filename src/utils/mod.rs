//! Utility functions shared by the services.
//!
//! - [`html`] - Rewriting note HTML (sanitizing, attachment links, image proxy)

pub mod html;
