//! Syllabus generation engine for structured course configurations
//!
//! This crate loads per-course YAML configurations and their CSV data
//! tables, validates and normalizes them into a structured load report,
//! and renders the validated content as independent markdown fragments
//! for an external site generator to assemble.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod render;
