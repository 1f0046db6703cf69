//! Core pipeline for clientdocs.
//!
//! Ties together discovery, classification, page rendering and index
//! rendering into a single regenerate-from-source pass (`pipeline::generate`).

pub mod catalog;
pub mod discovery;
pub mod index;
pub mod pages;
pub mod pipeline;
