// src/document/mod.rs

//! Reading dependency documents and writing task sequences.
//!
//! Responsibilities:
//! - Define the serde data model (`model.rs`).
//! - Load and parse an input document (`loader.rs`).
//! - Render and write the output document (`writer.rs`).
//!
//! Documents are JSON or TOML, chosen by file extension.

pub mod loader;
pub mod model;
pub mod writer;

pub use loader::{format_for_path, load_from_path, parse_document};
pub use model::{DependencyDocument, DependencyPair, TaskSequenceDocument};
pub use writer::{derive_output_path, render_document, write_output};
