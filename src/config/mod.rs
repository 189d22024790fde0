//! Configuration loading and validation for the syllabus engine.
//!
//! This module provides functionality to load course configurations
//! from YAML files, validate and normalize them, and load the CSV data
//! tables they reference.
//!
//! # Example
//!
//! ```no_run
//! use syllabus_engine::config::ConfigLoader;
//!
//! let report = ConfigLoader::load("./config/econ2010/course.yaml").unwrap();
//! println!("Loaded course: {:?}", report.config.course);
//! ```

mod loader;
mod tables;
mod types;
mod validate;

pub use loader::ConfigLoader;
pub use types::{
    CourseConfig, CourseSection, DescriptionSection, InstructorSection, MeetingSection, Textbook,
};
pub use validate::{
    DateValidation, SchemaValidation, normalize, normalize_semester, semester_matches_pattern,
    validate_dates, validate_schema,
};
