//! Trilium Notes integration.

mod client;

pub use client::TriliumClient;
